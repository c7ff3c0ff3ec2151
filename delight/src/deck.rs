use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
};

/// The face-down draw pile. `full()` builds the complete 108-card deck in a
/// fixed order; callers shuffle before play.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());
        let mut id_counter = 0u16;
        let mut next_id = || {
            let id = id_counter;
            id_counter += 1;
            id
        };

        for color in CardColor::iter() {
            // One 0 and two of each other number per color
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::colored(next_id(), color, Rank::Number(*number)));
            }

            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::colored(next_id(), color, Rank::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::colored(next_id(), color, Rank::Reverse));
            }

            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::colored(next_id(), color, Rank::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild(next_id(), Rank::Wild));
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild(next_id(), Rank::WildDrawFour));
        }

        Self(cards)
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.0.shuffle(&mut rng);
    }

    pub(crate) fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.0.len());
        self.0.drain(0..count).collect::<Vec<_>>()
    }

    pub(crate) fn draw(&mut self) -> Option<Card> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The face-up discard pile. Constructed with the start card, so it is never
/// empty and `top()` always has a card to return.
#[derive(Debug)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub(crate) fn start_with(card: Card) -> Self {
        Self(vec![card])
    }

    pub(crate) fn place(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn top(&self) -> &Card {
        self.0
            .last()
            .expect("the discard pile holds at least the start card")
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    /// Empties everything under the top card, leaving the top alone on the
    /// pile. Used to rebuild the draw pile when it runs dry.
    pub(crate) fn take_all_but_top(&mut self) -> Vec<Card> {
        let top = self
            .0
            .pop()
            .expect("the discard pile holds at least the start card");
        let buried = std::mem::take(&mut self.0);
        self.0.push(top);
        buried
    }
}
