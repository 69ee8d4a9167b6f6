//! Per-play-through bookkeeping shared by every game

use crate::round::{Outcome, Round, Rules};
use crate::types::{GameId, SessionState};

/// State, score and frame counter of one play-through
///
/// Score only grows while the round is active; awards arriving after the
/// round ended are dropped.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameId,
    round: Round,
    score: u32,
    frame: u64,
}

impl Session {
    pub fn new(game: GameId) -> Self {
        Self {
            game,
            round: Round::new(),
            score: 0,
            frame: 0,
        }
    }

    pub fn game(&self) -> GameId {
        self.game
    }

    pub fn state(&self) -> SessionState {
        self.round.state()
    }

    pub fn is_active(&self) -> bool {
        self.round.is_active()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Reset score and frame, enter `Active`
    pub fn start(&mut self) {
        self.round.start();
        self.score = 0;
        self.frame = 0;
    }

    /// Count one simulation tick; returns the new frame number
    pub fn advance_frame(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    pub fn award(&mut self, points: u32) {
        if self.is_active() {
            self.score = self.score.saturating_add(points);
        }
    }

    pub fn resolve(&mut self, outcome: Outcome) -> bool {
        let changed = self.round.resolve(outcome);
        if changed {
            log::debug!(
                "{} ended: {} with score {}",
                self.game,
                self.state().as_str(),
                self.score
            );
        }
        changed
    }

    pub fn settle<R: Rules + ?Sized>(&mut self, rules: &R) -> Option<Outcome> {
        let outcome = self.round.settle(rules);
        if outcome.is_some() {
            log::debug!(
                "{} ended: {} with score {}",
                self.game,
                self.state().as_str(),
                self.score
            );
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn awards_only_count_while_active() {
        let mut s = Session::new(GameId::Snake);
        s.award(10);
        assert_eq!(s.score(), 0);

        s.start();
        s.award(10);
        s.award(10);
        assert_eq!(s.score(), 20);

        s.resolve(Outcome::Lost);
        s.award(10);
        assert_eq!(s.score(), 20);
    }

    #[test]
    fn restart_clears_score_and_frame() {
        let mut s = Session::new(GameId::GeometryDash);
        s.start();
        s.award(30);
        s.advance_frame();
        s.resolve(Outcome::Lost);
        s.start();
        assert_eq!(s.score(), 0);
        assert_eq!(s.frame(), 0);
        assert_eq!(s.state(), SessionState::Active);
    }
}
