//! Engine crate: drives game modules in real time.
//!
//! - [`clock`]: fixed-interval loop driver fed with elapsed time
//! - [`delay`]: cancellable continuations with stale-generation dropping
//! - [`host`]: one mounted session, its ordering and crash containment
//! - [`scoreboard`]: high scores, leaderboards and reward notification
//! - [`registry`]: catalog id to module
//! - [`config`]: `FUNZONE_*` environment configuration

pub mod clock;
pub mod config;
pub mod delay;
pub mod error;
pub mod host;
pub mod registry;
pub mod scoreboard;

pub use clock::{Flow, LoopDriver, LoopHandle, MAX_CATCH_UP_TICKS};
pub use config::EngineConfig;
pub use delay::{DelayQueue, DelayToken};
pub use error::EngineError;
pub use host::{GameHost, HostStatus, SessionReport};
pub use registry::{create_module, ModuleOptions};
pub use scoreboard::{today, LogRewards, Recorded, RewardSink, Scoreboard};
