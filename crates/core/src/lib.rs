//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the arcade. It has **no dependencies** on
//! terminals, timers, or files: the host feeds it ticks and actions, and
//! reads back snapshots.
//!
//! - **Deterministic**: every random draw goes through a seeded [`GameRng`]
//! - **Testable**: kernels and games are plain structs with unit tests
//! - **Portable**: runs headless (tests, benches) or behind the terminal UI
//!
//! # Module Structure
//!
//! - [`rng`]: seeded PCG wrapper for spawns, shuffles, and opponents
//! - [`physics`]: gravity/jump kernel and forgiving box collision
//! - [`grid`]: snake body, stepping, and food placement
//! - [`round`]: session state machine, rule evaluation, and countdowns
//! - [`session`]: per-play-through bookkeeping (state, score, frame)
//! - [`scoring`]: score formulas for every game
//! - [`leaderboard`]: per-game top-5 tables and the recent-scores feed
//! - [`store`]: the high-score persistence seam
//! - [`module`]: the [`GameModule`] contract the host drives
//! - [`snapshot`]: read-only views handed to renderers
//! - [`games`]: the nine catalog games
//!
//! # Example
//!
//! ```
//! use funzone_core::games::hangman::Hangman;
//! use funzone_core::GameModule;
//! use funzone_types::{Action, SessionState};
//!
//! let mut game = Hangman::with_word(7, "CACHE");
//! game.start();
//! for c in ['C', 'A', 'H', 'E'] {
//!     game.handle_action(Action::Guess(c));
//! }
//! assert_eq!(game.state(), SessionState::Won);
//! assert_eq!(game.current_score(), 60 + 25);
//! ```

pub mod games;
pub mod grid;
pub mod leaderboard;
pub mod module;
pub mod physics;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod store;

pub use funzone_types as types;

// Re-export commonly used types for convenience
pub use grid::{Cell, GridKernel, StepOutcome};
pub use leaderboard::{LeaderboardEntry, Leaderboards, RecentScore};
pub use module::{GameFault, GameModule};
pub use physics::{Aabb, Actor, PhysicsConfig};
pub use rng::GameRng;
pub use round::{Countdown, CountdownEvent, Outcome, Round, Rules};
pub use session::Session;
pub use snapshot::{GameSnapshot, View};
pub use store::{record_high_score, HighScoreStore, MemoryHighScores, StoreError};
