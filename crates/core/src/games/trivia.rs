//! Ninja Trivia - ten timed multiple-choice questions
//!
//! Each question has a 15 second countdown advanced by virtual one-second
//! ticks. Answering freezes the countdown and asks the host for
//! [`Continuation::NextQuestion`] after the feedback pause. A countdown that
//! reaches zero ends the round as lost. Answering the last question wins.

use crate::games::content::{Question, TRIVIA_QUESTIONS};
use crate::module::{GameFault, GameModule};
use crate::round::{Countdown, CountdownEvent, Outcome};
use crate::scoring::trivia_score;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Continuation, Delay, GameId, SessionState, FEEDBACK_DELAY_MS, VIRTUAL_SECOND_MS};

pub const SECONDS_PER_QUESTION: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaView {
    /// 1-based question number
    pub number: usize,
    pub total: usize,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub selected: Option<u8>,
    /// Correct option, revealed once answered
    pub correct: Option<u8>,
    pub seconds_left: u32,
    pub correct_count: u32,
}

pub struct Trivia {
    session: Session,
    questions: &'static [Question],
    index: usize,
    countdown: Countdown,
    selected: Option<u8>,
    correct_count: u32,
}

impl Trivia {
    pub fn new(_seed: u64) -> Self {
        Self {
            session: Session::new(GameId::Trivia),
            questions: &TRIVIA_QUESTIONS,
            index: 0,
            countdown: Countdown::new(SECONDS_PER_QUESTION),
            selected: None,
            correct_count: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn seconds_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    fn question(&self) -> &'static Question {
        &self.questions[self.index]
    }
}

impl GameModule for Trivia {
    fn game_id(&self) -> GameId {
        GameId::Trivia
    }

    fn start(&mut self) {
        self.session.start();
        self.index = 0;
        self.countdown.reset(SECONDS_PER_QUESTION);
        self.selected = None;
        self.correct_count = 0;
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
        let Action::Choose(option) = action else {
            return None;
        };
        if !self.session.is_active() || self.selected.is_some() || option >= 4 {
            return None;
        }

        self.selected = Some(option);
        self.countdown.pause();
        if option == self.question().answer {
            self.correct_count += 1;
            self.session.award(trivia_score(self.countdown.remaining()));
        }
        Some(Delay::new(FEEDBACK_DELAY_MS, Continuation::NextQuestion))
    }

    fn resume(&mut self, then: Continuation) -> Option<Delay> {
        if then != Continuation::NextQuestion || !self.session.is_active() || self.selected.is_none() {
            return None;
        }
        if self.index + 1 >= self.questions.len() {
            self.session.resolve(Outcome::Won);
            return None;
        }
        self.index += 1;
        self.selected = None;
        self.countdown.reset(SECONDS_PER_QUESTION);
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
        let q = self.question();
        GameSnapshot {
            game: GameId::Trivia,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Trivia(TriviaView {
                number: self.index + 1,
                total: self.questions.len(),
                prompt: q.prompt,
                options: q.options,
                selected: self.selected,
                correct: self.selected.map(|_| q.answer),
                seconds_left: self.countdown.remaining(),
                correct_count: self.correct_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Trivia {
        let mut t = Trivia::new(0);
        t.start();
        t
    }

    #[test]
    fn instant_correct_answer_scores_250() {
        let mut t = started();
        let answer = TRIVIA_QUESTIONS[0].answer;
        let delay = t.handle_action(Action::Choose(answer));
        assert_eq!(
            delay,
            Some(Delay::new(FEEDBACK_DELAY_MS, Continuation::NextQuestion))
        );
        assert_eq!(t.current_score(), 250);
    }

    #[test]
    fn wrong_answer_scores_nothing() {
        let mut t = started();
        let wrong = (TRIVIA_QUESTIONS[0].answer + 1) % 4;
        t.handle_action(Action::Choose(wrong));
        assert_eq!(t.current_score(), 0);
        assert!(t.is_answered());
    }

    #[test]
    fn countdown_freezes_while_answered() {
        let mut t = started();
        t.tick(VIRTUAL_SECOND_MS).unwrap();
        t.handle_action(Action::Choose(0));
        t.tick(VIRTUAL_SECOND_MS).unwrap();
        t.tick(VIRTUAL_SECOND_MS).unwrap();
        assert_eq!(t.seconds_left(), 14);
        t.resume(Continuation::NextQuestion);
        assert_eq!(t.index(), 1);
        assert_eq!(t.seconds_left(), SECONDS_PER_QUESTION);
    }

    #[test]
    fn expiry_loses() {
        let mut t = started();
        for _ in 0..SECONDS_PER_QUESTION {
            t.tick(VIRTUAL_SECOND_MS).unwrap();
        }
        assert_eq!(t.state(), SessionState::Lost);
        assert_eq!(t.handle_action(Action::Choose(0)), None);
    }

    #[test]
    fn answering_every_question_wins() {
        let mut t = started();
        for q in TRIVIA_QUESTIONS {
            t.handle_action(Action::Choose(q.answer));
            t.resume(Continuation::NextQuestion);
        }
        assert_eq!(t.state(), SessionState::Won);
        assert_eq!(t.current_score(), 2500);
    }

    #[test]
    fn second_answer_to_the_same_question_is_ignored() {
        let mut t = started();
        t.handle_action(Action::Choose(3));
        assert_eq!(t.handle_action(Action::Choose(0)), None);
    }
}
