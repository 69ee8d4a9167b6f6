//! The contract every game implements so the host can drive it
//!
//! A module never sleeps or schedules anything itself. Time arrives through
//! [`GameModule::tick`]; deferred work is requested by returning a
//! [`Delay`] which the host runs later through [`GameModule::resume`].

use thiserror::Error;

use crate::snapshot::GameSnapshot;
use crate::types::{Action, Continuation, Delay, GameId, SessionState};

/// A simulation step hit a state it cannot continue from
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameFault {
    #[error("non-finite physics state at frame {frame}")]
    NonFinite { frame: u64 },

    #[error("broken invariant: {0}")]
    Invariant(&'static str),
}

pub trait GameModule {
    fn game_id(&self) -> GameId;

    /// Begin (or restart) a play-through
    fn start(&mut self);

    /// Advance one scheduled tick, `dt_ms` after the previous one
    ///
    /// Continuous games advance one fixed simulation step; timer games feed
    /// `dt_ms` to their countdown; games with no periodic work return
    /// `Ok(None)`.
    fn tick(&mut self, dt_ms: u32) -> Result<Option<Delay>, GameFault>;

    /// Apply a player action; inapplicable actions are ignored
    fn handle_action(&mut self, action: Action) -> Option<Delay>;

    /// Run a continuation previously requested through a [`Delay`]
    fn resume(&mut self, _then: Continuation) -> Option<Delay> {
        None
    }

    /// Whether the input buffer should keep `action` at all
    fn admits(&self, _action: &Action) -> bool {
        true
    }

    fn state(&self) -> SessionState;

    fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }

    fn current_score(&self) -> u32;

    /// Period of [`GameModule::tick`], `None` for purely event-driven games
    fn tick_interval_ms(&self) -> Option<u32>;

    fn snapshot(&self) -> GameSnapshot;
}
