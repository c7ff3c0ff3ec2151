use crate::card::{Card, CardId};
use crate::constants::SEATS;

/// A fixed position in turn order, always in `0..4`. Seat 0 is the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seat(usize);

impl Seat {
    pub const HUMAN: Seat = Seat(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn all() -> impl Iterator<Item = Seat> {
        (0..SEATS).map(Seat)
    }

    /// Moves `steps` seats along `direction`, wrapping into `0..4` in both
    /// directions (counter-clockwise from seat 0 lands on seat 3).
    pub fn advance(self, direction: Direction, steps: usize) -> Seat {
        let offset = direction.step() as isize * steps as isize;
        let index = (self.0 as isize + offset).rem_euclid(SEATS as isize);
        Seat(index as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub(crate) fn flip(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The signed seat-index step, +1 clockwise or -1 counter-clockwise.
    pub fn step(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

#[derive(Debug)]
pub struct Player {
    pub seat: Seat,
    name: String,
    pub hand: Vec<Card>,
    pub is_computer: bool,
}

impl Player {
    pub(crate) fn new(seat: Seat, name: String, cards: Vec<Card>) -> Self {
        Self {
            seat,
            name,
            hand: cards,
            is_computer: seat != Seat::HUMAN,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|card| card.id == id)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
