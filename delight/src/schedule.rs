use std::time::Duration;

use crate::card::CardId;
use crate::error::GameError;
use crate::player::Seat;

/// An engine action to run after a presentation-layer delay.
///
/// The embedded `generation` pins the action to the round it was armed for.
/// Starting a new game bumps the game's generation, so a timer armed before
/// the reset resolves to [`ScheduleResult::Stale`] instead of mutating the
/// fresh round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAction {
    pub(crate) generation: u64,
    /// How long the presentation layer should wait before running the action.
    pub delay: Duration,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Let the computer policy take `seat`'s turn.
    ComputerTurn(Seat),
    /// Play the card `seat` just drew; wilds get a uniformly random color.
    AutoPlayDrawn { seat: Seat, card: CardId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleResult {
    /// The action ran against the round it was armed for.
    Completed,
    /// The round was replaced while the timer was pending; nothing changed.
    Stale,
    /// The round moved on underneath the timer (for example the card was
    /// already played); nothing changed.
    Rejected(GameError),
}
