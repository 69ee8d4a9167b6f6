//! Engine configuration from the environment
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `FUNZONE_SEED` | RNG seed for every module | derived from the clock |
//! | `FUNZONE_DATA_DIR` | directory holding `highscores.json` | `<data dir>/funzone` |
//! | `FUNZONE_PLAYER` | name written to the leaderboard | `You` |
//! | `FUNZONE_FRAME_MS` | render/poll period of the terminal loop | `16` |
//! | `FUNZONE_HOT_SEAT` | `1`/`true` for local tic-tac-toe | off |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use funzone_core::types::{DEFAULT_PLAYER, FRAME_MS};

use crate::error::EngineError;
use crate::registry::ModuleOptions;

pub const HIGH_SCORE_FILE: &str = "highscores.json";
pub const MAX_PLAYER_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub player: String,
    pub frame_ms: u32,
    pub hot_seat: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: None,
            player: DEFAULT_PLAYER.to_string(),
            frame_ms: FRAME_MS,
            hot_seat: false,
        }
    }
}

impl EngineConfig {
    /// Read `FUNZONE_*` variables; unparsable values fall back to defaults
    pub fn from_env() -> Self {
        let seed = env::var("FUNZONE_SEED").ok().and_then(|s| s.trim().parse().ok());

        let data_dir = env::var("FUNZONE_DATA_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let player = env::var("FUNZONE_PLAYER")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

        let frame_ms = env::var("FUNZONE_FRAME_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(FRAME_MS);

        let hot_seat = env::var("FUNZONE_HOT_SEAT")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        Self {
            seed,
            data_dir,
            player,
            frame_ms,
            hot_seat,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.frame_ms == 0 || self.frame_ms > 1000 {
            return Err(EngineError::Config(format!(
                "frame period must be 1..=1000 ms, got {}",
                self.frame_ms
            )));
        }
        if self.player.trim().is_empty() {
            return Err(EngineError::Config("player name is empty".to_string()));
        }
        if self.player.chars().count() > MAX_PLAYER_LEN {
            return Err(EngineError::Config(format!(
                "player name longer than {MAX_PLAYER_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Configured seed, or one derived from the current time
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Where the high-score file lives, `None` if no data directory is known
    pub fn high_score_path(&self) -> Option<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()?.join("funzone"),
        };
        Some(dir.join(HIGH_SCORE_FILE))
    }

    pub fn module_options(&self) -> ModuleOptions {
        ModuleOptions {
            hot_seat: self.hot_seat,
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
