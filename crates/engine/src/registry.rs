//! Builds the module behind each catalog entry

use funzone_core::games::tictactoe::Opponent;
use funzone_core::games::{ChessLite, CodeBreaker, Hangman, Memory, Runner, Snake, TicTacToe, Trivia, Typing};
use funzone_core::types::GameId;
use funzone_core::GameModule;

/// Options that change how a module is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Local two-player tic-tac-toe instead of the computer opponent
    pub hot_seat: bool,
}

pub fn create_module(game: GameId, seed: u64, options: ModuleOptions) -> Box<dyn GameModule> {
    match game {
        GameId::GeometryDash => Box::new(Runner::new(seed)),
        GameId::Snake => Box::new(Snake::new(seed)),
        GameId::TicTacToe => {
            let opponent = if options.hot_seat {
                Opponent::Local
            } else {
                Opponent::Computer
            };
            Box::new(TicTacToe::with_opponent(seed, opponent))
        }
        GameId::Memory => Box::new(Memory::new(seed)),
        GameId::Hangman => Box::new(Hangman::new(seed)),
        GameId::Trivia => Box::new(Trivia::new(seed)),
        GameId::CodeBreaker => Box::new(CodeBreaker::new(seed)),
        GameId::Typing => Box::new(Typing::new(seed)),
        GameId::ChessLite => Box::new(ChessLite::new(seed)),
    }
}
