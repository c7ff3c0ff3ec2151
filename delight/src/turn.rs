use crate::card::{Card, CardColor};
use crate::player::Seat;

/// What a successful play did to the round, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A plain numeral: the turn moved one seat along.
    Advanced,
    /// The seat after the player lost its turn entirely.
    Skipped { skipped: Seat },
    /// Turn order flipped; the turn moved one seat along the new direction.
    Reversed,
    /// Draw Two or Wild Draw Four: `target` picked up `count` cards and is
    /// the new current seat.
    PenaltyDrawn { target: Seat, count: usize },
    /// A Wild changed the active color.
    ColorChanged { color: CardColor },
    /// The play emptied the hand. No card effect is applied past this point.
    Won { winner: Seat },
}

/// What a draw resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The drawn card may be played right away; the turn stays with the
    /// drawer until they play or the armed follow-up fires.
    Playable { card: Card },
    /// The drawn card does not follow the discard top; the turn advanced.
    Kept { card: Card },
    /// Both piles are down to the lone discard top. Nothing changed and the
    /// turn did not advance.
    Exhausted,
}
