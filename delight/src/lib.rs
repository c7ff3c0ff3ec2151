//! Round engine for UNO Delight: the 108-card deck, the turn state machine,
//! play legality, and the uniform-random computer seats. Rendering and input
//! live in whatever presentation layer embeds [`game::Game`]; it forwards
//! human play/draw intents, renders the snapshots, and arms plain timers for
//! the [`schedule::ScheduledAction`]s the engine hands back.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod policy;
pub mod schedule;
pub mod turn;
