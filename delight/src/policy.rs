use rand::{seq::IteratorRandom, thread_rng};
use tracing::debug;

use crate::card::CardColor;
use crate::error::Result;
use crate::game::Game;
use crate::player::Seat;

/// Takes one computer seat's turn: a uniformly random choice among the legal
/// cards in hand, or a draw when none of them follow the discard top. A
/// playable drawn card arms its own follow-up on the game, so the caller
/// only needs to poll [`Game::next_scheduled`] afterwards.
pub fn take_computer_turn(game: &mut Game, seat: Seat) -> Result<()> {
    let top = game.discard_pile().top().clone();
    let choice = {
        let mut rng = thread_rng();
        game.player(seat)
            .hand
            .iter()
            .filter(|card| card.can_follow(&top))
            .choose(&mut rng)
            .map(|card| (card.id, card.is_wild()))
    };

    match choice {
        Some((card_id, is_wild)) => {
            let color = is_wild.then(|| CardColor::random(&mut thread_rng()));
            game.play_card(seat, card_id, color)?;
        }
        None => {
            debug!(seat = seat.index(), "no legal card, drawing");
            game.draw_card(seat)?;
        }
    }

    Ok(())
}
