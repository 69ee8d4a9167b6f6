//! Round state machine and countdowns
//!
//! A [`Round`] only moves forward: `Idle → Active → {Won, Lost, Draw}`.
//! Once terminal, every further transition is refused until [`Round::start`]
//! begins a fresh play-through.
//!
//! Turn-based games describe their end conditions through [`Rules`]; the
//! round checks them in a fixed order (win, then loss, then draw) so a move
//! that satisfies several predicates resolves the same way every time.

use crate::types::{SessionState, VIRTUAL_SECOND_MS};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => SessionState::Won,
            Outcome::Lost => SessionState::Lost,
            Outcome::Draw => SessionState::Draw,
        }
    }
}

/// End-condition predicates of a turn-based game
pub trait Rules {
    fn is_won(&self) -> bool;
    fn is_lost(&self) -> bool;
    fn is_drawn(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Round {
    state: SessionState,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Begin a play-through (from idle or after a finished round)
    pub fn start(&mut self) {
        self.state = SessionState::Active;
    }

    /// End an active round; `false` if it was not active
    pub fn resolve(&mut self, outcome: Outcome) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = outcome.into();
        true
    }

    /// Evaluate `rules` and resolve on the first predicate that holds
    pub fn settle<R: Rules + ?Sized>(&mut self, rules: &R) -> Option<Outcome> {
        if !self.is_active() {
            return None;
        }
        let outcome = if rules.is_won() {
            Outcome::Won
        } else if rules.is_lost() {
            Outcome::Lost
        } else if rules.is_drawn() {
            Outcome::Draw
        } else {
            return None;
        };
        self.resolve(outcome);
        Some(outcome)
    }
}

/// What one countdown tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Paused; nothing changed
    Held,
    /// One second elapsed, this many remain
    Second(u32),
    /// Reached zero
    Expired,
}

/// Whole-second countdown fed with elapsed milliseconds
///
/// Sub-second remainders carry over between calls; a paused countdown
/// discards elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    carry_ms: u32,
    paused: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            carry_ms: 0,
            paused: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Restart at `seconds` and unpause
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.carry_ms = 0;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Subtract `seconds`, floored at zero
    pub fn penalize(&mut self, seconds: u32) {
        self.remaining = self.remaining.saturating_sub(seconds);
    }

    /// Feed `dt_ms` of elapsed time
    ///
    /// A countdown already at zero (after a penalty) expires on the next
    /// call regardless of `dt_ms`.
    pub fn advance(&mut self, dt_ms: u32) -> CountdownEvent {
        if self.paused {
            return CountdownEvent::Held;
        }
        if self.remaining == 0 {
            return CountdownEvent::Expired;
        }
        self.carry_ms = self.carry_ms.saturating_add(dt_ms);
        let whole = self.carry_ms / VIRTUAL_SECOND_MS;
        if whole == 0 {
            return CountdownEvent::Held;
        }
        self.carry_ms %= VIRTUAL_SECOND_MS;
        self.remaining = self.remaining.saturating_sub(whole);
        if self.remaining == 0 {
            CountdownEvent::Expired
        } else {
            CountdownEvent::Second(self.remaining)
        }
    }
}
