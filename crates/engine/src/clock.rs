//! Clock / loop driver
//!
//! The driver owns no thread and no timer. The host feeds it wall-clock
//! elapsed time through [`LoopDriver::pump`], and the driver fires the tick
//! function once per whole interval that has accumulated.
//!
//! | event | effect |
//! |-------|--------|
//! | `start(interval)` | new handle, accumulator cleared |
//! | `pump(elapsed, f)` | `f` runs once per due interval, at most [`MAX_CATCH_UP_TICKS`] |
//! | `f` returns `Flow::Stop` | driver stops, no further ticks |
//! | `f` returns `Err` | driver stops, error is returned |
//! | `stop(&handle)` | stops only if `handle` is the current run |

use log::{debug, warn};

use crate::error::{guard, EngineError};

/// Upper bound on ticks fired by one `pump` after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Identifies one run of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopHandle {
    id: u64,
}

/// What the tick function wants after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Default)]
pub struct LoopDriver {
    interval_ms: u32,
    accumulated_ms: u64,
    active: Option<u64>,
    next_id: u64,
    ticks: u64,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run at `interval_ms` (clamped to at least 1 ms)
    pub fn start(&mut self, interval_ms: u32) -> LoopHandle {
        self.next_id += 1;
        self.interval_ms = interval_ms.max(1);
        self.accumulated_ms = 0;
        self.ticks = 0;
        self.active = Some(self.next_id);
        LoopHandle { id: self.next_id }
    }

    /// Stop the run identified by `handle`; stale handles are ignored
    pub fn stop(&mut self, handle: &LoopHandle) -> bool {
        if self.active == Some(handle.id) {
            self.active = None;
            self.accumulated_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Ticks fired in the current (or last) run
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Milliseconds until the next tick is due, `None` when stopped
    pub fn until_next_tick_ms(&self) -> Option<u64> {
        self.active?;
        Some((self.interval_ms as u64).saturating_sub(self.accumulated_ms))
    }

    /// Account for `elapsed_ms` and fire every due tick
    ///
    /// Returns the number of ticks fired. A tick that errors or panics stops
    /// the driver before the error is returned.
    pub fn pump<F>(&mut self, elapsed_ms: u64, mut tick: F) -> Result<u32, EngineError>
    where
        F: FnMut() -> Result<Flow, EngineError>,
    {
        if self.active.is_none() {
            return Ok(0);
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);

        let interval = self.interval_ms as u64;
        let mut fired = 0;
        while self.accumulated_ms >= interval {
            if fired == MAX_CATCH_UP_TICKS {
                let skipped = self.accumulated_ms / interval;
                debug!("loop driver behind by {skipped} ticks, skipping");
                self.accumulated_ms %= interval;
                break;
            }
            self.accumulated_ms -= interval;
            self.ticks += 1;
            fired += 1;

            match guard(&mut tick).and_then(|r| r) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    self.halt();
                    break;
                }
                Err(err) => {
                    warn!("tick {} failed, stopping loop: {err}", self.ticks);
                    self.halt();
                    return Err(err);
                }
            }
        }
        Ok(fired)
    }

    fn halt(&mut self) {
        self.active = None;
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funzone_core::GameFault;

    #[test]
    fn fires_once_per_whole_interval() {
        let mut driver = LoopDriver::new();
        driver.start(200);
        let mut count = 0;
        assert_eq!(driver.pump(150, || { count += 1; Ok(Flow::Continue) }), Ok(0));
        assert_eq!(driver.pump(100, || { count += 1; Ok(Flow::Continue) }), Ok(1));
        assert_eq!(driver.until_next_tick_ms(), Some(150));
        assert_eq!(count, 1);
    }

    #[test]
    fn catch_up_is_bounded() {
        let mut driver = LoopDriver::new();
        driver.start(16);
        let fired = driver.pump(10_000, || Ok(Flow::Continue)).unwrap();
        assert_eq!(fired, MAX_CATCH_UP_TICKS);
        assert!(driver.until_next_tick_ms().unwrap() <= 16);
    }

    #[test]
    fn stop_request_halts_the_loop() {
        let mut driver = LoopDriver::new();
        driver.start(10);
        let fired = driver.pump(50, || Ok(Flow::Stop)).unwrap();
        assert_eq!(fired, 1);
        assert!(!driver.is_running());
        assert_eq!(driver.pump(50, || Ok(Flow::Continue)), Ok(0));
    }

    #[test]
    fn failing_tick_stops_and_reports() {
        let mut driver = LoopDriver::new();
        driver.start(10);
        let err = driver
            .pump(30, || Err(GameFault::Invariant("bad").into()))
            .unwrap_err();
        assert!(matches!(err, EngineError::Fault(_)));
        assert!(!driver.is_running());
        assert_eq!(driver.ticks(), 1);
    }

    #[test]
    fn panicking_tick_stops_the_loop() {
        let mut driver = LoopDriver::new();
        driver.start(10);
        let err = driver.pump(10, || -> Result<Flow, EngineError> { panic!("tick exploded") });
        assert_eq!(err, Err(EngineError::Panicked("tick exploded".to_string())));
        assert!(!driver.is_running());
    }

    #[test]
    fn stale_handle_cannot_stop_a_new_run() {
        let mut driver = LoopDriver::new();
        let old = driver.start(10);
        let new = driver.start(10);
        assert!(!driver.stop(&old));
        assert!(driver.is_running());
        assert!(driver.stop(&new));
        assert!(!driver.is_running());
    }
}
