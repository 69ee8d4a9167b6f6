//! Snapshot module - read-only game views for renderers
//!
//! A snapshot is a plain value copied out of a module after each step. The
//! terminal layer draws from it and never touches live game state.

use crate::games::chess::ChessView;
use crate::games::codebreaker::CodeBreakerView;
use crate::games::hangman::HangmanView;
use crate::games::memory::MemoryView;
use crate::games::runner::RunnerView;
use crate::games::snake::SnakeView;
use crate::games::tictactoe::TicTacToeView;
use crate::games::trivia::TriviaView;
use crate::games::typing::TypingView;
use crate::types::{GameId, SessionState};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub game: GameId,
    pub state: SessionState,
    pub score: u32,
    /// Simulation ticks (or virtual seconds) elapsed this session
    pub frame: u64,
    pub view: View,
}

/// Game-specific part of a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Runner(RunnerView),
    Snake(SnakeView),
    TicTacToe(TicTacToeView),
    Memory(MemoryView),
    Hangman(HangmanView),
    Trivia(TriviaView),
    CodeBreaker(CodeBreakerView),
    Typing(TypingView),
    Chess(ChessView),
}

impl GameSnapshot {
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Seconds left on the round clock, for timer-driven games
    pub fn seconds_left(&self) -> Option<u32> {
        match &self.view {
            View::Trivia(v) => Some(v.seconds_left),
            View::CodeBreaker(v) => Some(v.seconds_left),
            View::Typing(v) => Some(v.seconds_left),
            _ => None,
        }
    }
}
