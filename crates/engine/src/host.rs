//! Game host - drives one mounted [`GameModule`]
//!
//! The host owns the loop driver, the delay queue and the input buffer for
//! a single session. Each [`GameHost::step`] runs in a fixed order:
//!
//! 1. due ticks fire (each drains at most one buffered action first)
//! 2. due continuations run
//! 3. delays requested in 1 and 2 are scheduled
//! 4. the new action is buffered (continuous games) or applied (the rest)
//! 5. the snapshot is refreshed; a terminal state produces the report
//!
//! Because ticks run before input, a timer that expires in a step wins over
//! an answer delivered in the same step.
//!
//! Every mutating call into the module is guarded. A fault or panic crashes the
//! session only: the loop stops, pending delays are dropped, the last good
//! snapshot stays on screen, and no report is produced.

use log::{debug, error, info};

use funzone_core::types::{Action, Delay, GameId, SessionState};
use funzone_core::{GameModule, GameSnapshot};
use funzone_input::InputBuffer;

use crate::clock::{Flow, LoopDriver, LoopHandle};
use crate::delay::DelayQueue;
use crate::error::{guard, EngineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    Idle,
    Running,
    Finished(SessionState),
    Crashed,
}

/// Final result of a session, emitted exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub game: GameId,
    pub outcome: SessionState,
    pub score: u32,
    pub frames: u64,
    pub elapsed_ms: u64,
}

pub struct GameHost {
    module: Box<dyn GameModule>,
    driver: LoopDriver,
    loop_handle: Option<LoopHandle>,
    delays: DelayQueue,
    input: InputBuffer<Action>,
    status: HostStatus,
    elapsed_ms: u64,
    last_good: GameSnapshot,
    crash: Option<String>,
}

impl GameHost {
    pub fn new(module: Box<dyn GameModule>) -> Self {
        let last_good = module.snapshot();
        Self {
            module,
            driver: LoopDriver::new(),
            loop_handle: None,
            delays: DelayQueue::new(),
            input: InputBuffer::new(),
            status: HostStatus::Idle,
            elapsed_ms: 0,
            last_good,
            crash: None,
        }
    }

    pub fn game(&self) -> GameId {
        self.last_good.game
    }

    pub fn status(&self) -> HostStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == HostStatus::Running
    }

    /// Latest snapshot taken while the module was healthy
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.last_good
    }

    pub fn crash_reason(&self) -> Option<&str> {
        self.crash.as_deref()
    }

    /// Pending actions overwritten before a tick consumed them
    pub fn dropped_inputs(&self) -> u64 {
        self.input.dropped()
    }

    /// Start (or restart) the session from a clean slate
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.stop_timers();
        self.crash = None;
        self.elapsed_ms = 0;

        if let Err(err) = guard(|| self.module.start()) {
            self.crash(err.clone());
            return Err(err);
        }
        if let Some(interval) = self.module.tick_interval_ms() {
            self.loop_handle = Some(self.driver.start(interval));
        }
        self.status = HostStatus::Running;
        self.refresh();
        info!("session started: {}", self.game().as_str());
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.start()
    }

    /// Stop the session without a report; queued continuations go stale
    pub fn teardown(&mut self) {
        self.stop_timers();
        if self.status == HostStatus::Running {
            debug!("session torn down: {}", self.game().as_str());
            self.status = HostStatus::Idle;
        }
    }

    /// Advance by `elapsed_ms` of wall-clock time and apply `action`
    ///
    /// Returns the session report on the step that reaches a terminal state.
    pub fn step(&mut self, elapsed_ms: u64, action: Option<Action>) -> Option<SessionReport> {
        if self.status != HostStatus::Running {
            return None;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        let mut requested: Vec<Delay> = Vec::new();
        if let Err(err) = self.fire_ticks(elapsed_ms, &mut requested) {
            self.crash(err);
            return None;
        }

        for then in self.delays.advance(elapsed_ms) {
            if self.module.is_terminal() {
                break;
            }
            match guard(|| self.module.resume(then)) {
                Ok(next) => requested.extend(next),
                Err(err) => {
                    self.crash(err);
                    return None;
                }
            }
        }

        if let Some(action) = action {
            if let Err(err) = self.apply(action, &mut requested) {
                self.crash(err);
                return None;
            }
        }

        if !self.module.is_terminal() {
            for delay in requested {
                self.delays.schedule(delay);
            }
        }

        if !self.refresh() {
            return None;
        }
        if self.last_good.is_terminal() {
            return Some(self.finish());
        }
        None
    }

    /// Milliseconds until the next tick or continuation is due
    pub fn until_next_event_ms(&self) -> Option<u64> {
        match (self.driver.until_next_tick_ms(), self.delays.next_due_in_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn fire_ticks(&mut self, elapsed_ms: u64, requested: &mut Vec<Delay>) -> Result<u32, EngineError> {
        let dt_ms = self.driver.interval_ms();
        let module = &mut self.module;
        let input = &mut self.input;
        self.driver.pump(elapsed_ms, || {
            if let Some(action) = input.drain() {
                requested.extend(module.handle_action(action));
            }
            requested.extend(module.tick(dt_ms)?);
            Ok(if module.is_terminal() {
                Flow::Stop
            } else {
                Flow::Continue
            })
        })
    }

    fn apply(&mut self, action: Action, requested: &mut Vec<Delay>) -> Result<(), EngineError> {
        if self.module.is_terminal() {
            return Ok(());
        }
        if self.game().is_continuous() {
            let module = &self.module;
            let input = &mut self.input;
            let kept = guard(|| input.push_if(action, |a| module.admits(a)))?;
            if !kept {
                debug!("input {action:?} refused");
            }
        } else {
            requested.extend(guard(|| self.module.handle_action(action))?);
        }
        Ok(())
    }

    /// Take a fresh snapshot; returns false if that crashed the session
    fn refresh(&mut self) -> bool {
        match guard(|| self.module.snapshot()) {
            Ok(snapshot) => {
                self.last_good = snapshot;
                true
            }
            Err(err) => {
                self.crash(err);
                false
            }
        }
    }

    fn finish(&mut self) -> SessionReport {
        self.stop_timers();
        let outcome = self.last_good.state;
        self.status = HostStatus::Finished(outcome);
        let report = SessionReport {
            game: self.last_good.game,
            outcome,
            score: self.last_good.score,
            frames: self.last_good.frame,
            elapsed_ms: self.elapsed_ms,
        };
        info!(
            "session ended: {} {} with {} points",
            report.game.as_str(),
            outcome.as_str(),
            report.score
        );
        report
    }

    fn crash(&mut self, err: EngineError) {
        error!("{} crashed: {err}", self.game().as_str());
        self.stop_timers();
        self.status = HostStatus::Crashed;
        self.crash = Some(err.to_string());
    }

    fn stop_timers(&mut self) {
        if let Some(handle) = self.loop_handle.take() {
            self.driver.stop(&handle);
        }
        self.delays.invalidate();
        self.input.clear();
    }
}

impl Drop for GameHost {
    fn drop(&mut self) {
        self.teardown();
    }
}
