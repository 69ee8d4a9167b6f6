//! High scores on disk, recorded through the scoreboard

use funzone::core::HighScoreStore;
use funzone::engine::{Scoreboard, SessionReport};
use funzone::store::JsonHighScores;
use funzone::types::{GameId, SessionState};
use serde_json::Value;
use tempfile::tempdir;

fn report(game: GameId, score: u32) -> SessionReport {
    SessionReport {
        game,
        outcome: SessionState::Won,
        score,
        frames: 0,
        elapsed_ms: 0,
    }
}

#[test]
fn test_scoreboard_persists_best_by_game_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("highscores.json");

    let mut board = Scoreboard::new(Box::new(JsonHighScores::open(&path).unwrap()));
    assert!(board.record(&report(GameId::TicTacToe, 100), "You", "2024-05-01").new_high_score);
    assert!(board.record(&report(GameId::ChessLite, 512), "You", "2024-05-01").new_high_score);
    assert!(!board.record(&report(GameId::ChessLite, 20), "You", "2024-05-02").new_high_score);

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["scores"]["tic-tac-toe"], 100);
    assert_eq!(json["scores"]["chess-lite"], 512);

    let reopened = JsonHighScores::open(&path).unwrap();
    assert_eq!(reopened.high_score(GameId::ChessLite), 512);
    assert_eq!(reopened.high_score(GameId::Snake), 0);
}

#[test]
fn test_unknown_ids_in_file_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("highscores.json");
    std::fs::write(&path, r#"{"version":1,"scores":{"pong":999,"snake":30}}"#).unwrap();

    let store = JsonHighScores::open(&path).unwrap();
    assert_eq!(store.high_score(GameId::Snake), 30);
    assert_eq!(store.high_score(GameId::GeometryDash), 0);
}
