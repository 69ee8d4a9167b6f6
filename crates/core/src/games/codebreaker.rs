//! Code Breaker - ten puzzle levels against a 60 second clock
//!
//! Answers are compared trimmed and case-insensitively. A solved level
//! scores `ceil(seconds_left / 2) * 10`, locks input, and waits for
//! [`Continuation::NextLevel`]. A wrong answer costs 5 seconds; the one hint
//! per level costs 10. A penalty that empties the clock loses the round on
//! the spot.

use crate::games::content::{CipherLevel, CIPHER_LEVELS};
use crate::module::{GameFault, GameModule};
use crate::round::{Countdown, CountdownEvent, Outcome};
use crate::scoring::code_breaker_score;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Continuation, Delay, GameId, SessionState, LEVEL_ADVANCE_DELAY_MS, VIRTUAL_SECOND_MS};

pub const SECONDS_PER_LEVEL: u32 = 60;
pub const WRONG_ANSWER_PENALTY: u32 = 5;
pub const HINT_PENALTY: u32 = 10;
pub const MAX_INPUT_LEN: usize = 24;

/// Result of the last submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBreakerView {
    /// 1-based level number
    pub level: usize,
    pub total: usize,
    pub prompt: &'static str,
    pub hint: Option<&'static str>,
    pub input: String,
    pub seconds_left: u32,
    pub feedback: Feedback,
}

pub struct CodeBreaker {
    session: Session,
    levels: &'static [CipherLevel],
    index: usize,
    countdown: Countdown,
    input: String,
    hint_used: bool,
    feedback: Feedback,
    advancing: bool,
}

impl CodeBreaker {
    pub fn new(_seed: u64) -> Self {
        Self {
            session: Session::new(GameId::CodeBreaker),
            levels: &CIPHER_LEVELS,
            index: 0,
            countdown: Countdown::new(SECONDS_PER_LEVEL),
            input: String::new(),
            hint_used: false,
            feedback: Feedback::None,
            advancing: false,
        }
    }

    pub fn level(&self) -> usize {
        self.index
    }

    pub fn seconds_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    fn submit(&mut self) -> Option<Delay> {
        let guess = self.input.trim();
        if guess.is_empty() {
            return None;
        }

        let level = &self.levels[self.index];
        if guess.eq_ignore_ascii_case(level.answer) {
            self.session.award(code_breaker_score(self.countdown.remaining()));
            self.feedback = Feedback::Granted;
            self.advancing = true;
            self.countdown.pause();
            self.input.clear();
            Some(Delay::new(LEVEL_ADVANCE_DELAY_MS, Continuation::NextLevel))
        } else {
            self.feedback = Feedback::Denied;
            self.input.clear();
            self.penalize(WRONG_ANSWER_PENALTY);
            None
        }
    }

    fn penalize(&mut self, seconds: u32) {
        self.countdown.penalize(seconds);
        if self.countdown.is_expired() {
            self.session.resolve(Outcome::Lost);
        }
    }
}

impl GameModule for CodeBreaker {
    fn game_id(&self) -> GameId {
        GameId::CodeBreaker
    }

    fn start(&mut self) {
        self.session.start();
        self.index = 0;
        self.countdown.reset(SECONDS_PER_LEVEL);
        self.input.clear();
        self.hint_used = false;
        self.feedback = Feedback::None;
        self.advancing = false;
    }

    fn tick(&mut self, dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        if !self.session.is_active() {
            return Ok(None);
        }
        self.session.advance_frame();
        if self.countdown.advance(dt_ms) == CountdownEvent::Expired {
            self.session.resolve(Outcome::Lost);
        }
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        if !self.session.is_active() || self.advancing {
            return None;
        }
        match action {
            Action::Type(c) if !c.is_control() && self.input.chars().count() < MAX_INPUT_LEN => {
                self.input.push(c);
                None
            }
            Action::Erase => {
                self.input.pop();
                None
            }
            Action::Hint if !self.hint_used => {
                self.hint_used = true;
                self.penalize(HINT_PENALTY);
                None
            }
            Action::Submit => self.submit(),
            _ => None,
        }
    }

    fn resume(&mut self, then: Continuation) -> Option<Delay> {
        if then != Continuation::NextLevel || !self.session.is_active() || !self.advancing {
            return None;
        }
        if self.index + 1 >= self.levels.len() {
            self.session.resolve(Outcome::Won);
            return None;
        }
        self.index += 1;
        self.countdown.reset(SECONDS_PER_LEVEL);
        self.hint_used = false;
        self.feedback = Feedback::None;
        self.advancing = false;
        None
    }

    fn state(&self) -> SessionState {
        self.session.state()
    }

    fn current_score(&self) -> u32 {
        self.session.score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        Some(VIRTUAL_SECOND_MS)
    }

    fn snapshot(&self) -> GameSnapshot {
        let level = &self.levels[self.index];
        GameSnapshot {
            game: GameId::CodeBreaker,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::CodeBreaker(CodeBreakerView {
                level: self.index + 1,
                total: self.levels.len(),
                prompt: level.prompt,
                hint: self.hint_used.then_some(level.hint),
                input: self.input.clone(),
                seconds_left: self.countdown.remaining(),
                feedback: self.feedback,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> CodeBreaker {
        let mut c = CodeBreaker::new(0);
        c.start();
        c
    }

    fn type_str(c: &mut CodeBreaker, s: &str) -> Option<Delay> {
        for ch in s.chars() {
            c.handle_action(Action::Type(ch));
        }
        c.handle_action(Action::Submit)
    }

    #[test]
    fn solving_with_40_seconds_left_scores_200() {
        let mut c = started();
        for _ in 0..20 {
            c.tick(VIRTUAL_SECOND_MS).unwrap();
        }
        assert_eq!(c.seconds_left(), 40);
        let delay = type_str(&mut c, "10");
        assert_eq!(
            delay,
            Some(Delay::new(LEVEL_ADVANCE_DELAY_MS, Continuation::NextLevel))
        );
        assert_eq!(c.current_score(), 200);
        assert_eq!(c.feedback(), Feedback::Granted);
    }

    #[test]
    fn answers_are_trimmed_and_case_insensitive() {
        let mut c = started();
        c.index = 6;
        assert!(type_str(&mut c, "  s ").is_some());
    }

    #[test]
    fn wrong_answer_costs_five_seconds() {
        let mut c = started();
        assert_eq!(type_str(&mut c, "11"), None);
        assert_eq!(c.seconds_left(), 55);
        assert_eq!(c.feedback(), Feedback::Denied);
        assert!(c.input().is_empty());
    }

    #[test]
    fn hint_is_charged_once_per_level() {
        let mut c = started();
        c.handle_action(Action::Hint);
        c.handle_action(Action::Hint);
        assert_eq!(c.seconds_left(), 50);

        type_str(&mut c, "10");
        c.resume(Continuation::NextLevel);
        assert_eq!(c.level(), 1);
        assert_eq!(c.seconds_left(), 60);
        c.handle_action(Action::Hint);
        assert_eq!(c.seconds_left(), 50);
    }

    #[test]
    fn input_is_locked_while_advancing() {
        let mut c = started();
        type_str(&mut c, "10");
        c.handle_action(Action::Type('9'));
        assert!(c.input().is_empty());
        c.tick(VIRTUAL_SECOND_MS).unwrap();
        assert_eq!(c.seconds_left(), 60);
    }

    #[test]
    fn penalty_to_zero_loses_immediately() {
        let mut c = started();
        for _ in 0..12 {
            type_str(&mut c, "0");
        }
        assert_eq!(c.seconds_left(), 0);
        assert_eq!(c.state(), SessionState::Lost);

        // The right answer no longer counts
        assert_eq!(type_str(&mut c, "10"), None);
        assert_eq!(c.current_score(), 0);
    }

    #[test]
    fn hint_that_empties_the_clock_loses() {
        let mut c = started();
        c.countdown.reset(8);
        c.handle_action(Action::Hint);
        assert_eq!(c.seconds_left(), 0);
        assert_eq!(c.state(), SessionState::Lost);
    }

    #[test]
    fn clearing_every_level_wins() {
        let mut c = started();
        for level in CIPHER_LEVELS {
            type_str(&mut c, level.answer);
            c.resume(Continuation::NextLevel);
        }
        assert_eq!(c.state(), SessionState::Won);
        assert_eq!(c.current_score(), 10 * 300);
    }
}
