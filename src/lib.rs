//! Funzone Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and hosts the [`app`]
//! shell the terminal binary drives.

pub mod app;

pub use funzone_core as core;
pub use funzone_engine as engine;
pub use funzone_input as input;
pub use funzone_store as store;
pub use funzone_term as term;
pub use funzone_types as types;
