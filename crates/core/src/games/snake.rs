//! Neon Snake - grid snake on a 30×20 board
//!
//! Steering is committed on the next step. A request that reverses the
//! committed heading is refused before it reaches the input buffer (see
//! [`GameModule::admits`]); perpendicular and same-direction requests pass.

use crate::grid::{Cell, GridKernel, StepOutcome};
use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::Outcome;
use crate::scoring::FOOD_POINTS;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Delay, Direction, GameId, SessionState, SNAKE_STEP_MS};

pub const GRID_COLS: i16 = 30;
pub const GRID_ROWS: i16 = 20;
pub const START: Cell = Cell::new(10, 10);
pub const START_HEADING: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq)]
pub struct SnakeView {
    pub cols: i16,
    pub rows: i16,
    /// Head first
    pub body: Vec<Cell>,
    pub food: Cell,
    pub heading: Direction,
}

pub struct Snake {
    session: Session,
    kernel: GridKernel,
    pending: Direction,
    rng: GameRng,
}

impl Snake {
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let kernel = GridKernel::new(GRID_COLS, GRID_ROWS, START, START_HEADING, &mut rng);
        Self {
            session: Session::new(GameId::Snake),
            kernel,
            pending: START_HEADING,
            rng,
        }
    }

    pub fn kernel(&self) -> &GridKernel {
        &self.kernel
    }
}

impl GameModule for Snake {
    fn game_id(&self) -> GameId {
        GameId::Snake
    }

    fn start(&mut self) {
        self.session.start();
        self.kernel = GridKernel::new(GRID_COLS, GRID_ROWS, START, START_HEADING, &mut self.rng);
        self.pending = START_HEADING;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        if !self.session.is_active() {
            return Ok(None);
        }
        self.session.advance_frame();

        match self.kernel.step(self.pending, &mut self.rng) {
            StepOutcome::Moved => {}
            StepOutcome::Ate => self.session.award(FOOD_POINTS),
            StepOutcome::Filled => {
                self.session.award(FOOD_POINTS);
                self.session.resolve(Outcome::Won);
            }
            StepOutcome::HitWall | StepOutcome::HitSelf => {
                self.session.resolve(Outcome::Lost);
            }
        }

        if self.kernel.is_empty() {
            return Err(GameFault::Invariant("snake body is empty"));
        }
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        if let Action::Steer(dir) = action {
            if self.session.is_active() && !dir.is_opposite(self.kernel.heading()) {
                self.pending = dir;
            }
        }
        None
    }

    fn admits(&self, action: &Action) -> bool {
        match action {
            Action::Steer(dir) => !dir.is_opposite(self.kernel.heading()),
            _ => false,
        }
    }

    fn state(&self) -> SessionState {
        self.session.state()
    }

    fn current_score(&self) -> u32 {
        self.session.score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        Some(SNAKE_STEP_MS)
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: GameId::Snake,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Snake(SnakeView {
                cols: GRID_COLS,
                rows: GRID_ROWS,
                body: self.kernel.body().iter().copied().collect(),
                food: self.kernel.food(),
                heading: self.kernel.heading(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Snake {
        let mut s = Snake::new(11);
        s.start();
        s
    }

    #[test]
    fn starts_at_ten_ten_heading_right() {
        let s = started();
        assert_eq!(s.kernel().head(), START);
        assert_eq!(s.kernel().heading(), Direction::Right);
        assert_eq!(s.state(), SessionState::Active);
    }

    #[test]
    fn reversal_is_not_admitted() {
        let s = started();
        assert!(!s.admits(&Action::Steer(Direction::Left)));
        assert!(s.admits(&Action::Steer(Direction::Up)));
        assert!(s.admits(&Action::Steer(Direction::Right)));
        assert!(!s.admits(&Action::Jump));
    }

    #[test]
    fn steering_applies_on_next_step() {
        let mut s = started();
        s.handle_action(Action::Steer(Direction::Up));
        assert_eq!(s.kernel().heading(), Direction::Right);
        s.tick(SNAKE_STEP_MS).unwrap();
        assert_eq!(s.kernel().heading(), Direction::Up);
        assert_eq!(s.kernel().head(), Cell::new(10, 9));
    }

    #[test]
    fn running_into_the_wall_loses() {
        let mut s = started();
        for _ in 0..30 {
            s.tick(SNAKE_STEP_MS).unwrap();
            if s.is_terminal() {
                break;
            }
        }
        assert_eq!(s.state(), SessionState::Lost);
        assert!(s.kernel().contains(s.kernel().head()));
    }
}
