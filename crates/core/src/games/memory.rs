//! Memory Master - find the eight pairs in a shuffled 4×4 deck
//!
//! Flipping a second card counts one move. A mismatch leaves both cards
//! face-up until the host runs [`Continuation::HideMismatch`]; no card can
//! be flipped in the meantime. Clearing the deck scores `100 - moves`.

use arrayvec::ArrayVec;

use crate::games::content::MEMORY_SYMBOLS;
use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::Outcome;
use crate::scoring::memory_score;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Continuation, Delay, GameId, SessionState, MISMATCH_DELAY_MS};

pub const DECK_SIZE: usize = MEMORY_SYMBOLS.len() * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub symbol: char,
    pub face_up: bool,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub pairs_found: usize,
}

pub struct Memory {
    session: Session,
    deck: [char; DECK_SIZE],
    flipped: ArrayVec<usize, 2>,
    solved: [bool; DECK_SIZE],
    moves: u32,
    rng: GameRng,
}

impl Memory {
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(GameId::Memory),
            deck: fresh_deck(),
            flipped: ArrayVec::new(),
            solved: [false; DECK_SIZE],
            moves: 0,
            rng: GameRng::new(seed),
        }
    }

    pub fn deck(&self) -> &[char; DECK_SIZE] {
        &self.deck
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self, card: usize) -> bool {
        self.solved.get(card).copied().unwrap_or(false)
    }

    fn pairs_found(&self) -> usize {
        self.solved.iter().filter(|s| **s).count() / 2
    }
}

fn fresh_deck() -> [char; DECK_SIZE] {
    let mut deck = [' '; DECK_SIZE];
    for (i, symbol) in MEMORY_SYMBOLS.iter().enumerate() {
        deck[2 * i] = *symbol;
        deck[2 * i + 1] = *symbol;
    }
    deck
}

impl GameModule for Memory {
    fn game_id(&self) -> GameId {
        GameId::Memory
    }

    fn start(&mut self) {
        self.session.start();
        self.deck = fresh_deck();
        self.rng.shuffle(&mut self.deck);
        self.flipped.clear();
        self.solved = [false; DECK_SIZE];
        self.moves = 0;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        let Action::Pick(card) = action else {
            return None;
        };
        let card = card as usize;
        if !self.session.is_active()
            || card >= DECK_SIZE
            || self.flipped.is_full()
            || self.flipped.contains(&card)
            || self.solved[card]
        {
            return None;
        }

        self.flipped.push(card);
        if !self.flipped.is_full() {
            return None;
        }

        self.moves += 1;
        let (a, b) = (self.flipped[0], self.flipped[1]);
        if self.deck[a] != self.deck[b] {
            return Some(Delay::new(MISMATCH_DELAY_MS, Continuation::HideMismatch));
        }

        self.solved[a] = true;
        self.solved[b] = true;
        self.flipped.clear();
        if self.solved.iter().all(|s| *s) {
            self.session.award(memory_score(self.moves));
            self.session.resolve(Outcome::Won);
        }
        None
    }

    fn resume(&mut self, then: Continuation) -> Option<Delay> {
        if then == Continuation::HideMismatch {
            self.flipped.clear();
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
        None
    }

    fn snapshot(&self) -> GameSnapshot {
        let cards = self
            .deck
            .iter()
            .enumerate()
            .map(|(i, symbol)| CardView {
                symbol: *symbol,
                face_up: self.flipped.contains(&i) || self.solved[i],
                solved: self.solved[i],
            })
            .collect();
        GameSnapshot {
            game: GameId::Memory,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Memory(MemoryView {
                cards,
                moves: self.moves,
                pairs_found: self.pairs_found(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u64) -> Memory {
        let mut m = Memory::new(seed);
        m.start();
        m
    }

    fn partner(m: &Memory, card: usize) -> usize {
        (0..DECK_SIZE)
            .find(|&j| j != card && m.deck()[j] == m.deck()[card])
            .unwrap()
    }

    fn mismatch(m: &Memory) -> (usize, usize) {
        let b = (1..DECK_SIZE).find(|&j| m.deck()[j] != m.deck()[0]).unwrap();
        (0, b)
    }

    #[test]
    fn deck_holds_each_symbol_twice() {
        let m = started(4);
        for symbol in MEMORY_SYMBOLS {
            assert_eq!(m.deck().iter().filter(|c| **c == symbol).count(), 2);
        }
    }

    #[test]
    fn mismatch_blocks_until_hidden() {
        let mut m = started(4);
        let (a, b) = mismatch(&m);
        assert_eq!(m.handle_action(Action::Pick(a as u8)), None);
        let delay = m.handle_action(Action::Pick(b as u8));
        assert_eq!(
            delay,
            Some(Delay::new(MISMATCH_DELAY_MS, Continuation::HideMismatch))
        );
        assert_eq!(m.moves(), 1);

        let third = (0..DECK_SIZE).find(|&j| j != a && j != b).unwrap();
        m.handle_action(Action::Pick(third as u8));
        assert_eq!(m.moves(), 1);

        m.resume(Continuation::HideMismatch);
        m.handle_action(Action::Pick(third as u8));
        match m.snapshot().view {
            View::Memory(view) => assert!(view.cards[third].face_up),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn reflipping_the_same_card_is_ignored() {
        let mut m = started(2);
        m.handle_action(Action::Pick(0));
        m.handle_action(Action::Pick(0));
        assert_eq!(m.moves(), 0);
    }

    #[test]
    fn perfect_game_scores_92() {
        let mut m = started(8);
        for card in 0..DECK_SIZE {
            if m.is_solved(card) {
                continue;
            }
            let other = partner(&m, card);
            m.handle_action(Action::Pick(card as u8));
            m.handle_action(Action::Pick(other as u8));
        }
        assert_eq!(m.state(), SessionState::Won);
        assert_eq!(m.moves(), 8);
        assert_eq!(m.current_score(), 92);
    }
}
