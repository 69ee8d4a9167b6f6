//! Grid kernel - snake body, stepping, and food
//!
//! The body is a deque with the head at the front. One [`GridKernel::step`]
//! moves the head one cell along the committed heading and either grows
//! (food eaten) or drops the tail.
//!
//! Collision order per step:
//!
//! 1. the new head outside the grid → [`StepOutcome::HitWall`]
//! 2. the new head on any body cell, tail included → [`StepOutcome::HitSelf`]
//! 3. otherwise the head is pushed; food grows the body, else the tail pops
//!
//! On a collision the body is left untouched.

use std::collections::VecDeque;

use crate::rng::GameRng;
use crate::types::Direction;

/// Rejection-sampling attempts before falling back to a free-cell scan
const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Neighbour one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// What one step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    /// Ate the last free cell; nowhere left for food
    Filled,
    HitWall,
    HitSelf,
}

impl StepOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, StepOutcome::HitWall | StepOutcome::HitSelf)
    }
}

#[derive(Debug, Clone)]
pub struct GridKernel {
    cols: i16,
    rows: i16,
    body: VecDeque<Cell>,
    heading: Direction,
    food: Cell,
}

impl GridKernel {
    /// One-cell snake at `start` heading `heading`; food placed with `rng`
    pub fn new(cols: i16, rows: i16, start: Cell, heading: Direction, rng: &mut GameRng) -> Self {
        let mut kernel = Self {
            cols,
            rows,
            body: VecDeque::from([start]),
            heading,
            food: start,
        };
        if let Some(food) = kernel.free_cell(rng) {
            kernel.food = food;
        }
        kernel
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move one cell toward `heading`, which becomes the committed heading
    pub fn step(&mut self, heading: Direction, rng: &mut GameRng) -> StepOutcome {
        let next = self.head().step(heading);

        if !self.contains(next) {
            return StepOutcome::HitWall;
        }
        if self.occupies(next) {
            return StepOutcome::HitSelf;
        }

        self.heading = heading;
        self.body.push_front(next);

        if next == self.food {
            match self.free_cell(rng) {
                Some(food) => {
                    self.food = food;
                    StepOutcome::Ate
                }
                None => StepOutcome::Filled,
            }
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }

    /// Random cell not covered by the body, `None` when the grid is full
    fn free_cell(&self, rng: &mut GameRng) -> Option<Cell> {
        let total = self.cols as usize * self.rows as usize;
        if self.body.len() >= total {
            return None;
        }

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(
                rng.next_range(self.cols as u32) as i16,
                rng.next_range(self.rows as u32) as i16,
            );
            if !self.occupies(cell) {
                return Some(cell);
            }
        }

        // Crowded grid: pick uniformly among what is left
        let free: Vec<Cell> = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| Cell::new(x, y)))
            .filter(|c| !self.occupies(*c))
            .collect();
        rng.pick(&free).copied()
    }
}
