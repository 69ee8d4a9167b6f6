//! High-score persistence seam
//!
//! The core only knows the [`HighScoreStore`] trait. The file-backed store
//! lives in its own crate; [`MemoryHighScores`] serves tests and the
//! fallback when no data directory is usable.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::GameId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high-score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("high-score data could not be encoded: {0}")]
    Encode(String),

    #[error("high-score storage unavailable: {0}")]
    Unavailable(String),
}

/// Per-game personal best, read and written by game id
pub trait HighScoreStore {
    /// Stored best for `game`, `0` when none
    fn high_score(&self, game: GameId) -> u32;

    fn set_high_score(&mut self, game: GameId, score: u32) -> Result<(), StoreError>;
}

/// Persist `score` if it beats the stored best; `Ok(true)` when it did
pub fn record_high_score(
    store: &mut dyn HighScoreStore,
    game: GameId,
    score: u32,
) -> Result<bool, StoreError> {
    if score <= store.high_score(game) {
        return Ok(false);
    }
    store.set_high_score(game, score)?;
    Ok(true)
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    scores: BTreeMap<GameId, u32>,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryHighScores {
    fn high_score(&self, game: GameId) -> u32 {
        self.scores.get(&game).copied().unwrap_or(0)
    }

    fn set_high_score(&mut self, game: GameId, score: u32) -> Result<(), StoreError> {
        self.scores.insert(game, score);
        Ok(())
    }
}
