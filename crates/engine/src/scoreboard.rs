//! Scoreboard - where finished sessions are recorded
//!
//! Recording a report always checks the persistent high score (even for a
//! zero score), submits to the in-memory leaderboard only when the score is
//! positive, and notifies the reward collaborator once.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};

use funzone_core::leaderboard::date_from_days;
use funzone_core::types::GameId;
use funzone_core::{record_high_score, HighScoreStore, Leaderboards};

use crate::host::SessionReport;

/// Receives one notification per finished session
pub trait RewardSink {
    fn game_over(&mut self, game: GameId, score: u32);
}

/// Reward sink that only logs
#[derive(Debug, Default)]
pub struct LogRewards;

impl RewardSink for LogRewards {
    fn game_over(&mut self, game: GameId, score: u32) {
        info!("reward: {} finished with {score}", game.as_str());
    }
}

/// What recording a report changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recorded {
    pub new_high_score: bool,
    /// 1-based leaderboard rank, if the score made the table
    pub rank: Option<usize>,
}

pub struct Scoreboard {
    leaderboards: Leaderboards,
    high_scores: Box<dyn HighScoreStore>,
    rewards: Box<dyn RewardSink>,
}

impl Scoreboard {
    pub fn new(high_scores: Box<dyn HighScoreStore>) -> Self {
        Self {
            leaderboards: Leaderboards::new(),
            high_scores,
            rewards: Box::new(LogRewards),
        }
    }

    pub fn with_rewards(mut self, rewards: Box<dyn RewardSink>) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn leaderboards(&self) -> &Leaderboards {
        &self.leaderboards
    }

    pub fn best(&self, game: GameId) -> u32 {
        self.high_scores.high_score(game)
    }

    pub fn record(&mut self, report: &SessionReport, user: &str, date: &str) -> Recorded {
        let new_high_score = match record_high_score(self.high_scores.as_mut(), report.game, report.score) {
            Ok(raised) => raised,
            Err(err) => {
                warn!("could not store high score for {}: {err}", report.game.as_str());
                false
            }
        };
        if new_high_score {
            info!("new high score for {}: {}", report.game.as_str(), report.score);
        }

        let rank = if report.score > 0 {
            self.leaderboards.submit(report.game, user, report.score, date)
        } else {
            None
        };
        if let Some(rank) = rank {
            info!("{user} placed #{rank} on {}", report.game.as_str());
        }

        self.rewards.game_over(report.game, report.score);
        Recorded { new_high_score, rank }
    }
}

/// Today's UTC date as `YYYY-MM-DD`
pub fn today() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    date_from_days((secs / 86_400) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use funzone_core::types::SessionState;
    use funzone_core::{MemoryHighScores, StoreError};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn report(game: GameId, score: u32) -> SessionReport {
        SessionReport {
            game,
            outcome: SessionState::Lost,
            score,
            frames: 10,
            elapsed_ms: 1000,
        }
    }

    #[derive(Default, Clone)]
    struct Counter(Rc<RefCell<Vec<(GameId, u32)>>>);

    impl RewardSink for Counter {
        fn game_over(&mut self, game: GameId, score: u32) {
            self.0.borrow_mut().push((game, score));
        }
    }

    struct Broken;

    impl HighScoreStore for Broken {
        fn high_score(&self, _game: GameId) -> u32 {
            0
        }
        fn set_high_score(&mut self, _game: GameId, _score: u32) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk gone".into()))
        }
    }

    #[test]
    fn zero_score_is_not_ranked_but_rewarded() {
        let counter = Counter::default();
        let mut board = Scoreboard::new(Box::new(MemoryHighScores::new())).with_rewards(Box::new(counter.clone()));
        let recorded = board.record(&report(GameId::Snake, 0), "A", "2024-05-01");
        assert_eq!(recorded, Recorded::default());
        assert!(board.leaderboards().top(GameId::Snake).is_empty());
        assert_eq!(counter.0.borrow().as_slice(), &[(GameId::Snake, 0)]);
    }

    #[test]
    fn best_only_rises() {
        let mut board = Scoreboard::new(Box::new(MemoryHighScores::new()));
        assert!(board.record(&report(GameId::GeometryDash, 30), "A", "d").new_high_score);
        assert!(!board.record(&report(GameId::GeometryDash, 20), "A", "d").new_high_score);
        assert_eq!(board.best(GameId::GeometryDash), 30);
        assert_eq!(board.record(&report(GameId::GeometryDash, 20), "A", "d").rank, Some(2));
    }

    #[test]
    fn store_failure_does_not_block_the_leaderboard() {
        let mut board = Scoreboard::new(Box::new(Broken));
        let recorded = board.record(&report(GameId::Memory, 90), "A", "d");
        assert!(!recorded.new_high_score);
        assert_eq!(recorded.rank, Some(1));
    }

    #[test]
    fn today_is_an_iso_date() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert_eq!(&d[4..5], "-");
    }
}
