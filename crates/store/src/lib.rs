//! Durable high scores in a JSON file
//!
//! The file maps catalog ids to personal bests:
//!
//! ```json
//! { "version": 1, "scores": { "snake": 120, "trivia": 1750 } }
//! ```
//!
//! A missing file is an empty store. A file that fails to parse is logged
//! and replaced on the next write. Writes go to a sibling temp file that is
//! then renamed over the original.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use funzone_core::{HighScoreStore, StoreError};
use funzone_types::GameId;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    scores: BTreeMap<String, u32>,
}

#[derive(Debug, Clone)]
pub struct JsonHighScores {
    path: PathBuf,
    scores: BTreeMap<String, u32>,
}

impl JsonHighScores {
    /// Load `path`, creating its parent directory if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let scores = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<ScoreFile>(&text) {
                Ok(file) => {
                    info!("loaded {} high scores from {}", file.scores.len(), path.display());
                    file.scores
                }
                Err(err) => {
                    warn!("ignoring unreadable high scores in {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, scores })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let file = ScoreFile {
            version: FORMAT_VERSION,
            scores: self.scores.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| StoreError::Encode(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HighScoreStore for JsonHighScores {
    fn high_score(&self, game: GameId) -> u32 {
        self.scores.get(game.as_str()).copied().unwrap_or(0)
    }

    fn set_high_score(&mut self, game: GameId, score: u32) -> Result<(), StoreError> {
        let previous = self.scores.insert(game.as_str().to_string(), score);
        if let Err(err) = self.save() {
            match previous {
                Some(old) => self.scores.insert(game.as_str().to_string(), old),
                None => self.scores.remove(game.as_str()),
            };
            return Err(err);
        }
        Ok(())
    }
}
