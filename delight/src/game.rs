use rand::thread_rng;
use tracing::{debug, info};

use crate::card::{Card, CardColor, CardId, Rank};
use crate::constants::*;
use crate::deck::{Deck, DiscardPile};
use crate::error::{GameError, Result};
use crate::player::{Direction, Player, Seat};
use crate::policy;
use crate::schedule::{ActionKind, ScheduleResult, ScheduledAction};
use crate::turn::{DrawOutcome, PlayOutcome};

/// One round of UNO Delight: four seats, the two piles, and the turn
/// pointer. All mutation goes through [`Game::play_card`],
/// [`Game::draw_card`] and [`Game::run_scheduled`]; everything else is a
/// read-only snapshot for the presentation layer.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    draw_pile: Deck,
    discard_pile: DiscardPile,
    current: Seat,
    direction: Direction,
    winner: Option<Seat>,
    last_message: String,
    generation: u64,
    pending_follow_up: Option<ScheduledAction>,
}

impl Game {
    pub fn new() -> Self {
        let mut deck = Deck::full();
        deck.shuffle();
        Self::with_deck(deck)
    }

    /// Starts a round from a caller-prepared deck. Hands and the start card
    /// come off the front of the deck in order, which makes deterministic
    /// positions possible in tests.
    pub fn with_deck(mut deck: Deck) -> Self {
        let mut players = Vec::with_capacity(SEATS);
        for seat in Seat::all() {
            let name = if seat == Seat::HUMAN {
                "You".to_string()
            } else {
                format!("Computer {}", seat.index())
            };
            players.push(Player::new(seat, name, deck.deal(HAND_SIZE)));
        }

        let mut first = deck
            .draw()
            .expect("a full deck always covers the opening deal");
        // A wild start card never stays wild: it opens on a concrete color.
        if first.is_wild() {
            first.color = Some(CardColor::random(&mut thread_rng()));
        }

        info!(top = %first, "round started");

        Self {
            players,
            draw_pile: deck,
            last_message: format!("Game started! Top card is {}", first),
            discard_pile: DiscardPile::start_with(first),
            current: Seat::HUMAN,
            direction: Direction::Clockwise,
            winner: None,
            generation: 0,
            pending_follow_up: None,
        }
    }

    /// New Game: replaces the entire round state. The generation bump makes
    /// every timer armed against the old round stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Game::new();
        self.generation = generation;
    }

    /// Plays `card_id` from `seat`'s hand onto the discard pile.
    /// `chosen_color` is required for wild cards and ignored otherwise.
    pub fn play_card(
        &mut self,
        seat: Seat,
        card_id: CardId,
        chosen_color: Option<CardColor>,
    ) -> Result<PlayOutcome> {
        self.ensure_live()?;
        if seat != self.current {
            return Err(GameError::NotYourTurn);
        }

        let index = self
            .player(seat)
            .card_index(card_id)
            .ok_or(GameError::CardNotInHand)?;
        if !self.player(seat).hand[index].can_follow(self.discard_pile.top()) {
            return Err(GameError::IllegalPlay);
        }
        if self.player(seat).hand[index].is_wild() && chosen_color.is_none() {
            return Err(GameError::ColorChoiceRequired);
        }

        let mut card = self.player_mut(seat).remove_card(index);
        if card.is_wild() {
            card.color = chosen_color;
        }
        debug!(seat = seat.index(), card = %card, "card played");

        let rank = card.rank;
        let description = card.to_string();
        self.discard_pile.place(card);
        self.pending_follow_up = None;

        if self.player(seat).cards_count() == 0 {
            self.winner = Some(seat);
            self.last_message = if seat == Seat::HUMAN {
                "You win!".to_string()
            } else {
                format!("{} wins!", self.player(seat).name())
            };
            info!(seat = seat.index(), "round won");
            return Ok(PlayOutcome::Won { winner: seat });
        }

        let mut message = format!("{} played {}", self.player(seat).name(), description);
        let outcome = self.apply_rank_effect(rank, &mut message);
        self.last_message = message;
        Ok(outcome)
    }

    /// Moves one card from the draw pile into `seat`'s hand, refilling the
    /// draw pile from under the discard top if it ran dry. A playable drawn
    /// card leaves the turn with the drawer; an unplayable one advances it.
    pub fn draw_card(&mut self, seat: Seat) -> Result<DrawOutcome> {
        self.ensure_live()?;
        if seat != self.current {
            return Err(GameError::NotYourTurn);
        }

        let Some(card) = self.take_from_draw_pile() else {
            debug!(seat = seat.index(), "both piles exhausted, draw is a no-op");
            return Ok(DrawOutcome::Exhausted);
        };

        let playable = card.can_follow(self.discard_pile.top());
        let drawn = card.clone();
        debug!(seat = seat.index(), card = %drawn, playable, "card drawn");
        self.player_mut(seat).add_card(card);

        if self.player(seat).is_computer {
            self.last_message = format!("{} drew a card", self.player(seat).name());
        } else if playable && !drawn.is_wild() {
            self.last_message = format!("You drew a {}. You can play it!", drawn);
        } else {
            self.last_message = format!("You drew a {}", drawn);
        }

        if playable {
            self.pending_follow_up = self.drawn_card_follow_up(seat, &drawn);
            Ok(DrawOutcome::Playable { card: drawn })
        } else {
            self.current = self.current.advance(self.direction, 1);
            Ok(DrawOutcome::Kept { card: drawn })
        }
    }

    /// The next action the presentation layer should arm a timer for, if
    /// any: a pending drawn-card auto-play, or the current computer seat's
    /// turn. Call once after each state change.
    pub fn next_scheduled(&mut self) -> Option<ScheduledAction> {
        if let Some(action) = self.pending_follow_up.take() {
            return Some(action);
        }
        if self.winner.is_some() || !self.player(self.current).is_computer {
            return None;
        }
        Some(ScheduledAction {
            generation: self.generation,
            delay: COMPUTER_TURN_DELAY,
            kind: ActionKind::ComputerTurn(self.current),
        })
    }

    /// Runs a previously armed action when its timer fires. Actions from a
    /// round that has since been replaced are discarded untouched.
    pub fn run_scheduled(&mut self, action: ScheduledAction) -> ScheduleResult {
        if action.generation != self.generation {
            debug!(kind = ?action.kind, "discarding stale scheduled action");
            return ScheduleResult::Stale;
        }

        let outcome = match action.kind {
            ActionKind::ComputerTurn(seat) => policy::take_computer_turn(self, seat),
            ActionKind::AutoPlayDrawn { seat, card } => self.auto_play_drawn(seat, card),
        };

        match outcome {
            Ok(()) => ScheduleResult::Completed,
            Err(error) => {
                debug!(kind = ?action.kind, %error, "scheduled action rejected");
                ScheduleResult::Rejected(error)
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn ensure_live(&self) -> Result<()> {
        if self.winner.is_some() {
            Err(GameError::RoundOver)
        } else {
            Ok(())
        }
    }

    fn apply_rank_effect(&mut self, rank: Rank, message: &mut String) -> PlayOutcome {
        match rank {
            Rank::Number(_) => {
                self.current = self.current.advance(self.direction, 1);
                PlayOutcome::Advanced
            }
            Rank::Skip => {
                let skipped = self.current.advance(self.direction, 1);
                self.current = self.current.advance(self.direction, 2);
                message.push_str(&format!(
                    ". {}'s turn is skipped!",
                    self.player(skipped).name()
                ));
                PlayOutcome::Skipped { skipped }
            }
            Rank::Reverse => {
                self.direction = self.direction.flip();
                self.current = self.current.advance(self.direction, 1);
                message.push_str(". Direction reversed!");
                PlayOutcome::Reversed
            }
            Rank::DrawTwo => self.deliver_penalty(2, message),
            Rank::Wild => {
                let color = self
                    .discard_pile
                    .top()
                    .color
                    .expect("a played wild always carries its chosen color");
                self.current = self.current.advance(self.direction, 1);
                message.push_str(&format!(". Color changed to {}!", color));
                PlayOutcome::ColorChanged { color }
            }
            Rank::WildDrawFour => self.deliver_penalty(4, message),
        }
    }

    /// The seat one step along draws the penalty and becomes current, so the
    /// drawn cards sit in its hand before its own turn begins.
    fn deliver_penalty(&mut self, count: usize, message: &mut String) -> PlayOutcome {
        let target = self.current.advance(self.direction, 1);
        self.draw_to_hand(target, count);
        self.current = target;
        message.push_str(&format!(
            ". {} draws {} cards!",
            self.player(target).name(),
            count
        ));
        PlayOutcome::PenaltyDrawn { target, count }
    }

    fn draw_to_hand(&mut self, seat: Seat, count: usize) {
        for _ in 0..count {
            match self.take_from_draw_pile() {
                Some(card) => self.player_mut(seat).add_card(card),
                None => break,
            }
        }
    }

    /// Refills the draw pile from everything under the discard top when it
    /// runs dry. Returns `None` only when both piles are exhausted.
    fn take_from_draw_pile(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            let buried = self.discard_pile.take_all_but_top();
            if !buried.is_empty() {
                debug!(cards = buried.len(), "reshuffling discard pile into draw pile");
                self.draw_pile = Deck::from_cards(buried);
                self.draw_pile.shuffle();
            }
        }
        self.draw_pile.draw()
    }

    fn drawn_card_follow_up(&self, seat: Seat, drawn: &Card) -> Option<ScheduledAction> {
        let kind = ActionKind::AutoPlayDrawn {
            seat,
            card: drawn.id,
        };
        if self.player(seat).is_computer {
            Some(ScheduledAction {
                generation: self.generation,
                delay: DRAWN_CARD_FOLLOW_UP_DELAY,
                kind,
            })
        } else if drawn.is_wild() {
            // The human's drawn wild is played for them with a random color.
            Some(ScheduledAction {
                generation: self.generation,
                delay: DRAWN_WILD_AUTO_PLAY_DELAY,
                kind,
            })
        } else {
            None
        }
    }

    fn auto_play_drawn(&mut self, seat: Seat, card_id: CardId) -> Result<()> {
        let is_wild = self
            .player(seat)
            .hand
            .iter()
            .find(|card| card.id == card_id)
            .map(Card::is_wild)
            .ok_or(GameError::CardNotInHand)?;
        let color = is_wild.then(|| CardColor::random(&mut thread_rng()));
        self.play_card(seat, card_id, color)?;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
