//! Single-slot input buffer for continuous games.
//!
//! Key repeat can deliver several events between two simulation ticks. The
//! buffer keeps only the most recent admitted one, and the host drains it
//! once per tick, so a burst of keys never becomes a burst of moves.

/// Last-write-wins slot holding at most one pending action
#[derive(Debug, Clone, Default)]
pub struct InputBuffer<A> {
    slot: Option<A>,
    dropped: u64,
}

impl<A: Copy> InputBuffer<A> {
    pub fn new() -> Self {
        Self {
            slot: None,
            dropped: 0,
        }
    }

    /// Store `action`, replacing anything pending
    pub fn push(&mut self, action: A) {
        if self.slot.replace(action).is_some() {
            self.dropped += 1;
        }
    }

    /// Store `action` only if `admit` accepts it; returns whether it was kept
    pub fn push_if(&mut self, action: A, admit: impl FnOnce(&A) -> bool) -> bool {
        if !admit(&action) {
            return false;
        }
        self.push(action);
        true
    }

    /// Take the pending action, leaving the slot empty
    pub fn drain(&mut self) -> Option<A> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<A> {
        self.slot
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Actions overwritten before they were drained
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
