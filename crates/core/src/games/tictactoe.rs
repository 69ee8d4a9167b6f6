//! Tic-tac-toe against a random-move computer, or hot-seat for two
//!
//! Cells are numbered 0-8 row-major. The player is always `X` and moves
//! first. Against the computer, `O` answers after an
//! [`OPPONENT_DELAY_MS`] pause by picking uniformly among empty cells.

use arrayvec::ArrayVec;

use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::Rules;
use crate::scoring::TIC_TAC_TOE_WIN_POINTS;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Continuation, Delay, GameId, SessionState, OPPONENT_DELAY_MS};

pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Who plays `O`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opponent {
    #[default]
    Computer,
    /// Two players share the keyboard
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeView {
    pub cells: [Option<Mark>; 9],
    pub to_move: Mark,
    pub winning_line: Option<[usize; 3]>,
    pub opponent: Opponent,
    pub thinking: bool,
}

/// Board position; implements the end-of-game rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Grid([Option<Mark>; 9]);

impl Grid {
    fn winning_line(&self) -> Option<([usize; 3], Mark)> {
        LINES.iter().find_map(|&[a, b, c]| match (self.0[a], self.0[b], self.0[c]) {
            (Some(m), Some(n), Some(o)) if m == n && n == o => Some(([a, b, c], m)),
            _ => None,
        })
    }

    fn empty_cells(&self) -> ArrayVec<u8, 9> {
        (0..9u8).filter(|&i| self.0[i as usize].is_none()).collect()
    }
}

impl Rules for Grid {
    fn is_won(&self) -> bool {
        matches!(self.winning_line(), Some((_, Mark::X)))
    }

    fn is_lost(&self) -> bool {
        matches!(self.winning_line(), Some((_, Mark::O)))
    }

    fn is_drawn(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

pub struct TicTacToe {
    session: Session,
    grid: Grid,
    to_move: Mark,
    opponent: Opponent,
    thinking: bool,
    rng: GameRng,
}

impl TicTacToe {
    pub fn new(seed: u64) -> Self {
        Self::with_opponent(seed, Opponent::Computer)
    }

    pub fn with_opponent(seed: u64, opponent: Opponent) -> Self {
        Self {
            session: Session::new(GameId::TicTacToe),
            grid: Grid::default(),
            to_move: Mark::X,
            opponent,
            thinking: false,
            rng: GameRng::new(seed),
        }
    }

    pub fn cells(&self) -> [Option<Mark>; 9] {
        self.grid.0
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    fn place(&mut self, cell: usize) -> Option<Delay> {
        self.grid.0[cell] = Some(self.to_move);
        self.to_move = self.to_move.other();

        if self.grid.is_won() {
            self.session.award(TIC_TAC_TOE_WIN_POINTS);
        }
        if self.session.settle(&self.grid).is_some() {
            self.thinking = false;
            return None;
        }

        if self.opponent == Opponent::Computer && self.to_move == Mark::O {
            self.thinking = true;
            return Some(Delay::new(OPPONENT_DELAY_MS, Continuation::OpponentMove));
        }
        None
    }
}

impl GameModule for TicTacToe {
    fn game_id(&self) -> GameId {
        GameId::TicTacToe
    }

    fn start(&mut self) {
        self.session.start();
        self.grid = Grid::default();
        self.to_move = Mark::X;
        self.thinking = false;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        let Action::Pick(cell) = action else {
            return None;
        };
        let cell = cell as usize;
        if !self.session.is_active() || self.thinking || cell >= 9 || self.grid.0[cell].is_some() {
            return None;
        }
        if self.opponent == Opponent::Computer && self.to_move != Mark::X {
            return None;
        }
        self.place(cell)
    }

    fn resume(&mut self, then: Continuation) -> Option<Delay> {
        if then != Continuation::OpponentMove || !self.session.is_active() || !self.thinking {
            return None;
        }
        self.thinking = false;
        let empty = self.grid.empty_cells();
        let cell = *self.rng.pick(&empty)?;
        self.place(cell as usize)
    }

    fn state(&self) -> SessionState {
        self.session.state()
    }

    fn current_score(&self) -> u32 {
        self.session.score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        None
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: GameId::TicTacToe,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::TicTacToe(TicTacToeView {
                cells: self.grid.0,
                to_move: self.to_move,
                winning_line: self.grid.winning_line().map(|(line, _)| line),
                opponent: self.opponent,
                thinking: self.thinking,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_seat() -> TicTacToe {
        let mut g = TicTacToe::with_opponent(1, Opponent::Local);
        g.start();
        g
    }

    #[test]
    fn computer_reply_is_deferred() {
        let mut g = TicTacToe::new(9);
        g.start();
        let delay = g.handle_action(Action::Pick(4));
        assert_eq!(
            delay,
            Some(Delay::new(OPPONENT_DELAY_MS, Continuation::OpponentMove))
        );
        // Player cannot move while the computer is thinking
        assert_eq!(g.handle_action(Action::Pick(0)), None);
        assert!(g.cells()[0].is_none());

        g.resume(Continuation::OpponentMove);
        assert_eq!(g.cells().iter().filter(|c| c.is_some()).count(), 2);
        assert_eq!(g.to_move(), Mark::X);
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut g = hot_seat();
        g.handle_action(Action::Pick(0));
        g.handle_action(Action::Pick(0));
        assert_eq!(g.cells()[0], Some(Mark::X));
        assert_eq!(g.to_move(), Mark::O);
    }

    #[test]
    fn x_row_wins_100() {
        let mut g = hot_seat();
        for cell in [0, 3, 1, 4, 2] {
            g.handle_action(Action::Pick(cell));
        }
        assert_eq!(g.state(), SessionState::Won);
        assert_eq!(g.current_score(), 100);
    }

    #[test]
    fn o_diagonal_loses_with_zero() {
        let mut g = hot_seat();
        for cell in [1, 0, 2, 4, 3, 8] {
            g.handle_action(Action::Pick(cell));
        }
        assert_eq!(g.state(), SessionState::Lost);
        assert_eq!(g.current_score(), 0);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut g = hot_seat();
        // X O X / X O O / O X X
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            g.handle_action(Action::Pick(cell));
        }
        assert_eq!(g.state(), SessionState::Draw);
    }

    #[test]
    fn winning_last_move_beats_full_board() {
        let mut g = hot_seat();
        // X O X / O X O / O X X : the ninth move completes a diagonal
        for cell in [0, 1, 2, 3, 4, 5, 7, 6, 8] {
            g.handle_action(Action::Pick(cell));
        }
        assert_eq!(g.state(), SessionState::Won);
    }

    #[test]
    fn stale_opponent_move_after_game_over_is_ignored() {
        let mut g = hot_seat();
        for cell in [0, 3, 1, 4, 2] {
            g.handle_action(Action::Pick(cell));
        }
        assert_eq!(g.resume(Continuation::OpponentMove), None);
        assert_eq!(g.cells().iter().filter(|c| c.is_some()).count(), 5);
    }
}
