//! Leaderboards - per-game top-5 tables and a recent-scores feed
//!
//! Submissions are rejected when the score is zero. Accepted entries are
//! inserted after every existing entry with a greater or equal score, so ties
//! keep submission order, then each table is cut back to
//! [`LEADERBOARD_CAPACITY`].
//!
//! # Example
//!
//! ```
//! use funzone_core::Leaderboards;
//! use funzone_types::GameId;
//!
//! let mut boards = Leaderboards::new();
//! assert_eq!(boards.submit(GameId::Snake, "A", 50, "2024-05-01"), Some(1));
//! assert_eq!(boards.submit(GameId::Snake, "B", 90, "2024-05-01"), Some(1));
//! assert_eq!(boards.submit(GameId::Snake, "C", 0, "2024-05-01"), None);
//! assert_eq!(boards.top(GameId::Snake)[1].user, "A");
//! ```

use std::collections::{BTreeMap, VecDeque};

use arrayvec::ArrayVec;

use crate::types::{GameId, LEADERBOARD_CAPACITY, RECENT_SCORES_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user: String,
    pub score: u32,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// One line of the recent-scores feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentScore {
    pub game: GameId,
    pub user: String,
    pub score: u32,
    pub date: String,
}

type Table = ArrayVec<LeaderboardEntry, LEADERBOARD_CAPACITY>;

#[derive(Debug, Clone, Default)]
pub struct Leaderboards {
    tables: BTreeMap<GameId, Table>,
    recent: VecDeque<RecentScore>,
}

impl Leaderboards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a finished session's score
    ///
    /// Returns the 1-based rank the entry landed at, or `None` when the score
    /// is zero or did not make the table. Every positive score is added to
    /// the recent feed whether or not it ranked.
    pub fn submit(&mut self, game: GameId, user: &str, score: u32, date: &str) -> Option<usize> {
        if score == 0 {
            return None;
        }

        self.recent.push_front(RecentScore {
            game,
            user: user.to_string(),
            score,
            date: date.to_string(),
        });
        self.recent.truncate(RECENT_SCORES_CAPACITY);

        let table = self.tables.entry(game).or_default();
        let at = table
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(table.len());
        if at >= LEADERBOARD_CAPACITY {
            return None;
        }

        if table.is_full() {
            table.pop();
        }
        table.insert(
            at,
            LeaderboardEntry {
                user: user.to_string(),
                score,
                date: date.to_string(),
            },
        );
        Some(at + 1)
    }

    /// Entries for `game`, highest first
    pub fn top(&self, game: GameId) -> &[LeaderboardEntry] {
        self.tables.get(&game).map(|t| t.as_slice()).unwrap_or(&[])
    }

    /// Most recent submissions, newest first
    pub fn recent(&self) -> impl Iterator<Item = &RecentScore> {
        self.recent.iter()
    }
}

/// Civil `YYYY-MM-DD` for a count of days since 1970-01-01
pub fn date_from_days(days: i64) -> String {
    // civil_from_days (H. Hinnant)
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    format!("{year:04}-{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: &str = "2024-01-01";

    #[test]
    fn zero_scores_are_rejected() {
        let mut boards = Leaderboards::new();
        assert_eq!(boards.submit(GameId::Memory, "A", 0, DAY), None);
        assert!(boards.top(GameId::Memory).is_empty());
        assert_eq!(boards.recent().count(), 0);
    }

    #[test]
    fn ties_keep_submission_order() {
        let mut boards = Leaderboards::new();
        boards.submit(GameId::Trivia, "first", 90, DAY);
        boards.submit(GameId::Trivia, "second", 90, DAY);
        let users: Vec<_> = boards.top(GameId::Trivia).iter().map(|e| e.user.as_str()).collect();
        assert_eq!(users, ["first", "second"]);
    }

    #[test]
    fn full_table_drops_the_lowest() {
        let mut boards = Leaderboards::new();
        for (i, score) in [50, 40, 30, 20, 10].into_iter().enumerate() {
            boards.submit(GameId::Snake, &format!("p{i}"), score, DAY);
        }
        assert_eq!(boards.submit(GameId::Snake, "low", 5, DAY), None);
        assert_eq!(boards.submit(GameId::Snake, "mid", 35, DAY), Some(3));
        let scores: Vec<_> = boards.top(GameId::Snake).iter().map(|e| e.score).collect();
        assert_eq!(scores, [50, 40, 35, 30, 20]);
    }

    #[test]
    fn tables_are_per_game() {
        let mut boards = Leaderboards::new();
        boards.submit(GameId::Snake, "A", 10, DAY);
        assert!(boards.top(GameId::Hangman).is_empty());
    }

    #[test]
    fn recent_feed_keeps_last_ten() {
        let mut boards = Leaderboards::new();
        for score in 1..=12 {
            boards.submit(GameId::Typing, "A", score, DAY);
        }
        let recent: Vec<_> = boards.recent().map(|r| r.score).collect();
        assert_eq!(recent.len(), RECENT_SCORES_CAPACITY);
        assert_eq!(recent[0], 12);
        assert_eq!(recent[9], 3);
    }

    #[test]
    fn civil_dates() {
        assert_eq!(date_from_days(0), "1970-01-01");
        assert_eq!(date_from_days(19_723), "2024-01-01");
        assert_eq!(date_from_days(19_782), "2024-02-29");
    }
}
