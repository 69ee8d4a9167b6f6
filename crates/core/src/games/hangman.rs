//! Ninja Hangman - guess the word one letter at a time
//!
//! Six wrong letters lose the round. Revealing every letter wins it and
//! scores `(6 - mistakes) * 10 + word_len * 5`. Repeated and non A-Z
//! guesses are ignored.

use crate::games::content::HANGMAN_WORDS;
use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::Rules;
use crate::scoring::hangman_score;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Delay, GameId, SessionState};

pub const MAX_MISTAKES: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanView {
    /// One slot per letter, `None` while hidden
    pub pattern: Vec<Option<char>>,
    /// Guesses in the order they were made
    pub guessed: Vec<char>,
    pub mistakes: u32,
    pub max_mistakes: u32,
    /// The secret, shown once the round is over
    pub word: Option<&'static str>,
}

struct Puzzle<'a> {
    word: &'a str,
    guessed: &'a [char],
    mistakes: u32,
}

impl Rules for Puzzle<'_> {
    fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    fn is_lost(&self) -> bool {
        self.mistakes >= MAX_MISTAKES
    }
}

pub struct Hangman {
    session: Session,
    word: &'static str,
    fixed_word: bool,
    guessed: Vec<char>,
    mistakes: u32,
    rng: GameRng,
}

impl Hangman {
    /// Random word from the built-in list on every start
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(GameId::Hangman),
            word: HANGMAN_WORDS[0],
            fixed_word: false,
            guessed: Vec::new(),
            mistakes: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Always plays `word` (uppercase A-Z)
    pub fn with_word(seed: u64, word: &'static str) -> Self {
        Self {
            word,
            fixed_word: true,
            ..Self::new(seed)
        }
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    fn puzzle(&self) -> Puzzle<'_> {
        Puzzle {
            word: self.word,
            guessed: &self.guessed,
            mistakes: self.mistakes,
        }
    }
}

impl GameModule for Hangman {
    fn game_id(&self) -> GameId {
        GameId::Hangman
    }

    fn start(&mut self) {
        self.session.start();
        if !self.fixed_word {
            self.word = self.rng.pick(&HANGMAN_WORDS).copied().unwrap_or(HANGMAN_WORDS[0]);
        }
        self.guessed.clear();
        self.mistakes = 0;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        let Action::Guess(letter) = action else {
            return None;
        };
        let letter = letter.to_ascii_uppercase();
        if !self.session.is_active() || !letter.is_ascii_uppercase() || self.guessed.contains(&letter) {
            return None;
        }

        self.guessed.push(letter);
        if !self.word.contains(letter) {
            self.mistakes += 1;
        }

        if self.puzzle().is_won() {
            self.session.award(hangman_score(MAX_MISTAKES, self.mistakes, self.word.len()));
        }
        let puzzle = Puzzle {
            word: self.word,
            guessed: &self.guessed,
            mistakes: self.mistakes,
        };
        self.session.settle(&puzzle);
        None
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
        let pattern = self
            .word
            .chars()
            .map(|c| self.guessed.contains(&c).then_some(c))
            .collect();
        GameSnapshot {
            game: GameId::Hangman,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Hangman(HangmanView {
                pattern,
                guessed: self.guessed.clone(),
                mistakes: self.mistakes,
                max_mistakes: MAX_MISTAKES,
                word: self.session.state().is_terminal().then_some(self.word),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(word: &'static str) -> Hangman {
        let mut h = Hangman::with_word(1, word);
        h.start();
        h
    }

    #[test]
    fn two_misses_on_a_seven_letter_word_scores_75() {
        let mut h = started("STUDENT");
        for c in ['Z', 'Q', 'S', 'T', 'U', 'D', 'E', 'N'] {
            h.handle_action(Action::Guess(c));
        }
        assert_eq!(h.state(), SessionState::Won);
        assert_eq!(h.mistakes(), 2);
        assert_eq!(h.current_score(), 75);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut h = started("CACHE");
        for c in ['Z', 'Q', 'X', 'W', 'V', 'B'] {
            h.handle_action(Action::Guess(c));
        }
        assert_eq!(h.state(), SessionState::Lost);
        assert_eq!(h.current_score(), 0);
        h.handle_action(Action::Guess('C'));
        assert_eq!(h.state(), SessionState::Lost);
    }

    #[test]
    fn repeated_guess_costs_nothing() {
        let mut h = started("CACHE");
        h.handle_action(Action::Guess('Z'));
        h.handle_action(Action::Guess('Z'));
        h.handle_action(Action::Guess('z'));
        assert_eq!(h.mistakes(), 1);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut h = started("CACHE");
        h.handle_action(Action::Guess('1'));
        h.handle_action(Action::Guess('-'));
        assert_eq!(h.mistakes(), 0);
        match h.snapshot().view {
            View::Hangman(view) => assert!(view.guessed.is_empty()),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn lowercase_guesses_are_folded() {
        let mut h = started("NINJA");
        for c in ['n', 'i', 'j', 'a'] {
            h.handle_action(Action::Guess(c));
        }
        assert_eq!(h.state(), SessionState::Won);
    }

    #[test]
    fn random_word_comes_from_the_list() {
        let mut h = Hangman::new(99);
        h.start();
        assert!(HANGMAN_WORDS.contains(&h.word()));
    }
}
