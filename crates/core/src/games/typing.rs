//! Speed Typer - type as many words as possible in 60 seconds
//!
//! A word completes as soon as the input matches it exactly, or on
//! Space/Enter when the trimmed input matches. Space or Enter on a wrong
//! entry clears it. Each completed word scores `10 + len`. There is no win:
//! the round ends when the clock runs out.

use crate::games::content::TYPING_WORDS;
use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::{Countdown, CountdownEvent, Outcome};
use crate::scoring::typing_score;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Delay, GameId, SessionState, VIRTUAL_SECOND_MS};

pub const GAME_SECONDS: u32 = 60;
pub const MAX_INPUT_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingView {
    pub current: &'static str,
    pub next: &'static str,
    pub input: String,
    /// Length of the input prefix that matches `current`
    pub matched: usize,
    pub seconds_left: u32,
    pub words_typed: u32,
}

pub struct Typing {
    session: Session,
    countdown: Countdown,
    current: &'static str,
    next: &'static str,
    input: String,
    words_typed: u32,
    rng: GameRng,
}

impl Typing {
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(GameId::Typing),
            countdown: Countdown::new(GAME_SECONDS),
            current: TYPING_WORDS[0],
            next: TYPING_WORDS[1],
            input: String::new(),
            words_typed: 0,
            rng: GameRng::new(seed),
        }
    }

    pub fn current_word(&self) -> &'static str {
        self.current
    }

    pub fn next_word(&self) -> &'static str {
        self.next
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn words_typed(&self) -> u32 {
        self.words_typed
    }

    /// Characters of the input that match the current word so far
    pub fn matched_prefix(&self) -> usize {
        self.input
            .chars()
            .zip(self.current.chars())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn draw_word(&mut self) -> &'static str {
        self.rng.pick(TYPING_WORDS).copied().unwrap_or(TYPING_WORDS[0])
    }

    fn complete_word(&mut self) {
        self.session.award(typing_score(self.current));
        self.words_typed += 1;
        self.current = self.next;
        self.next = self.draw_word();
        self.input.clear();
    }

    fn commit(&mut self) {
        if self.input.trim() == self.current {
            self.complete_word();
        } else {
            self.input.clear();
        }
    }
}

impl GameModule for Typing {
    fn game_id(&self) -> GameId {
        GameId::Typing
    }

    fn start(&mut self) {
        self.session.start();
        self.countdown.reset(GAME_SECONDS);
        self.current = self.draw_word();
        self.next = self.draw_word();
        while self.next == self.current {
            self.next = self.draw_word();
        }
        self.input.clear();
        self.words_typed = 0;
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
        if !self.session.is_active() {
            return None;
        }
        match action {
            Action::Type(' ') | Action::Submit => self.commit(),
            Action::Type(c) if !c.is_control() && self.input.len() < MAX_INPUT_LEN => {
                self.input.push(c);
                if self.input == self.current {
                    self.complete_word();
                }
            }
            Action::Erase => {
                self.input.pop();
            }
            _ => {}
        }
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
        GameSnapshot {
            game: GameId::Typing,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Typing(TypingView {
                current: self.current,
                next: self.next,
                input: self.input.clone(),
                matched: self.matched_prefix(),
                seconds_left: self.countdown.remaining(),
                words_typed: self.words_typed,
            }),
        }
    }
}
