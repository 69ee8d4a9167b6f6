//! The nine catalog games
//!
//! Every game is a plain struct implementing [`GameModule`](crate::GameModule),
//! built from a seed so a host (or a test) can replay it exactly.

pub mod chess;
pub mod codebreaker;
pub mod content;
pub mod hangman;
pub mod memory;
pub mod runner;
pub mod snake;
pub mod tictactoe;
pub mod trivia;
pub mod typing;

pub use chess::ChessLite;
pub use codebreaker::CodeBreaker;
pub use hangman::Hangman;
pub use memory::Memory;
pub use runner::Runner;
pub use snake::Snake;
pub use tictactoe::TicTacToe;
pub use trivia::Trivia;
pub use typing::Typing;
