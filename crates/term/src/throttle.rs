//! Redraw throttling for screens that are not animating.
//!
//! Puzzle and board games change only on input or a delayed continuation.
//! While their snapshot fingerprint is unchanged the screen is repainted at
//! most once per `idle_interval_ms`; animating games always repaint.

use std::hash::Hasher;

use crate::core::GameSnapshot;

/// Stable 64-bit FNV-1a, so fingerprints do not depend on the std hasher
#[derive(Debug, Clone)]
pub struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Digest of everything a snapshot would draw
pub fn fingerprint(snapshot: &GameSnapshot) -> u64 {
    let mut h = Fnv1a::new();
    h.write(format!("{snapshot:?}").as_bytes());
    h.finish()
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_draw_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_draw_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call draws
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_draw(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_draw_ms) >= self.idle_interval_ms;
        if animating || changed || stale {
            self.last_draw_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }
}
