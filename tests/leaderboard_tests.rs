//! Leaderboard and high-score behavior through the public API

use funzone::core::{record_high_score, HighScoreStore, Leaderboards, MemoryHighScores};
use funzone::types::{GameId, LEADERBOARD_CAPACITY};
use proptest::prelude::*;

const DAY: &str = "2024-05-01";

#[test]
fn test_top_five_with_tie() {
    let mut boards = Leaderboards::new();
    for (user, score) in [("A", 50), ("B", 90), ("C", 30), ("D", 90), ("E", 10), ("F", 70)] {
        boards.submit(GameId::Snake, user, score, DAY);
    }

    let users: Vec<_> = boards.top(GameId::Snake).iter().map(|e| e.user.as_str()).collect();
    assert_eq!(users, ["B", "D", "F", "A", "C"]);
    assert_eq!(boards.recent().count(), 6);
    assert_eq!(boards.recent().next().map(|r| r.user.as_str()), Some("F"));
}

#[test]
fn test_high_score_only_rises() {
    let mut store = MemoryHighScores::new();
    assert!(record_high_score(&mut store, GameId::Snake, 40).unwrap());
    assert!(!record_high_score(&mut store, GameId::Snake, 40).unwrap());
    assert!(!record_high_score(&mut store, GameId::Snake, 10).unwrap());
    assert!(record_high_score(&mut store, GameId::Snake, 41).unwrap());
    assert_eq!(store.high_score(GameId::Snake), 41);
    assert_eq!(store.high_score(GameId::Memory), 0);
}

proptest! {
    #[test]
    fn prop_table_is_sorted_and_bounded(scores in prop::collection::vec(0u32..500, 0..40)) {
        let mut boards = Leaderboards::new();
        for (i, &score) in scores.iter().enumerate() {
            boards.submit(GameId::Memory, &format!("p{i}"), score, DAY);
        }
        let table = boards.top(GameId::Memory);
        prop_assert!(table.len() <= LEADERBOARD_CAPACITY);
        prop_assert!(table.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(table.iter().all(|e| e.score > 0));

        let mut positive: Vec<u32> = scores.iter().copied().filter(|&s| s > 0).collect();
        positive.sort_unstable_by(|a, b| b.cmp(a));
        positive.truncate(LEADERBOARD_CAPACITY);
        let kept: Vec<u32> = table.iter().map(|e| e.score).collect();
        prop_assert_eq!(kept, positive);
    }

    #[test]
    fn prop_high_score_is_running_max(scores in prop::collection::vec(0u32..10_000, 1..30)) {
        let mut store = MemoryHighScores::new();
        let mut best = 0;
        for score in scores {
            let raised = record_high_score(&mut store, GameId::Typing, score).unwrap();
            prop_assert_eq!(raised, score > best);
            best = best.max(score);
            prop_assert_eq!(store.high_score(GameId::Typing), best);
        }
    }
}
