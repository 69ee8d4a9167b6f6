//! Cancellable delayed continuations
//!
//! Every scheduled entry carries the queue's generation at scheduling time.
//! [`DelayQueue::invalidate`] bumps the generation, so anything scheduled
//! for a torn-down session is dropped when it comes due instead of running
//! against a fresh one.

use log::debug;

use funzone_core::types::{Continuation, Delay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayToken {
    id: u64,
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: DelayToken,
    due_ms: u64,
    then: Continuation,
}

#[derive(Debug, Default)]
pub struct DelayQueue {
    now_ms: u64,
    generation: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl DelayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn schedule(&mut self, delay: Delay) -> DelayToken {
        self.next_id += 1;
        let token = DelayToken {
            id: self.next_id,
            generation: self.generation,
        };
        self.pending.push(Pending {
            token,
            due_ms: self.now_ms + delay.after_ms as u64,
            then: delay.then,
        });
        token
    }

    /// Drop one pending entry; returns whether it was still queued
    pub fn cancel(&mut self, token: DelayToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.token != token);
        self.pending.len() != before
    }

    /// Mark everything currently queued as stale
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Move time forward and return due continuations in due order
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Continuation> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due_ms, p.token.id));

        let generation = self.generation;
        due.into_iter()
            .filter(|p| {
                let fresh = p.token.generation == generation;
                if !fresh {
                    debug!("dropping stale continuation {:?}", p.then);
                }
                fresh
            })
            .map(|p| p.then)
            .collect()
    }

    /// Milliseconds until the earliest live entry is due
    pub fn next_due_in_ms(&self) -> Option<u64> {
        self.pending
            .iter()
            .filter(|p| p.token.generation == self.generation)
            .map(|p| p.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// No live entries queued
    pub fn is_idle(&self) -> bool {
        self.next_due_in_ms().is_none()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
