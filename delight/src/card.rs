use core::fmt;
use std::fmt::Display;

use rand::{seq::IteratorRandom, Rng};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    pub(crate) fn random(rng: &mut impl Rng) -> Self {
        CardColor::iter()
            .choose(rng)
            .expect("there are always four colors to choose from")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }
}

/// Identity of one physical card in the 108-card deck. Ids are assigned once
/// when the deck is built and follow the card wherever it moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u16);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    /// `None` only while a wild card waits in a hand or pile; every card on
    /// the discard pile carries a concrete color.
    pub color: Option<CardColor>,
}

impl Card {
    pub fn colored(id: u16, color: CardColor, rank: Rank) -> Self {
        Self {
            id: CardId(id),
            rank,
            color: Some(color),
        }
    }

    pub fn wild(id: u16, rank: Rank) -> Self {
        Self {
            id: CardId(id),
            rank,
            color: None,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Whether this card may legally land on `top` of the discard pile:
    /// wild cards always may, anything else needs a color or rank match.
    /// Both the human input path and the computer policy go through here.
    pub fn can_follow(&self, top: &Card) -> bool {
        if self.is_wild() {
            return true;
        }
        (self.color.is_some() && self.color == top.color) || self.rank == top.rank
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Number(number) => number.to_string(),
            Rank::Skip => "Skip".to_string(),
            Rank::Reverse => "Reverse".to_string(),
            Rank::DrawTwo => "Draw Two".to_string(),
            Rank::Wild => "Wild".to_string(),
            Rank::WildDrawFour => "Wild Draw Four".to_string(),
        };
        match self.color {
            Some(color) => write!(f, "{} {}", color, rank),
            None => write!(f, "{}", rank),
        }
    }
}
