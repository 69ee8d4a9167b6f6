//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s for the game
//! being played, plus the app-level [`Command`]s (quit, back, restart).
//! Continuous games read their actions through a single-slot
//! [`InputBuffer`] drained once per tick.

pub mod buffer;
pub mod line;
pub mod map;

pub use funzone_types as types;

pub use buffer::InputBuffer;
pub use line::MoveEntry;
pub use map::{command_for, Command, KeyMapper};
