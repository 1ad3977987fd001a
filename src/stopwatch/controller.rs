//! Running/stopped state machine and elapsed-time bookkeeping.
//!
//! Elapsed time is always recomputed as `now - reference` rather than summed
//! from per-tick deltas, so late or skipped ticks never cause drift. Starting
//! after a stop rebases the reference by the frozen elapsed value, which makes
//! `start` a resume rather than a restart.

use super::clock::Clock;
use super::Millis;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

pub struct TimerController {
    clock: Arc<dyn Clock>,
    state: TimerState,
    elapsed: Millis,
    reference: Millis,
}

impl TimerController {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: TimerState::Stopped,
            elapsed: 0,
            reference: 0,
        }
    }

    /// Enter `Running`, continuing from the current elapsed value.
    ///
    /// Returns `false` (and changes nothing) if already running.
    pub fn start(&mut self) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.reference = self.clock.now_ms().saturating_sub(self.elapsed);
        self.state = TimerState::Running;
        true
    }

    /// Enter `Stopped`, freezing the last computed elapsed value.
    ///
    /// Returns `false` (and changes nothing) if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == TimerState::Stopped {
            return false;
        }
        self.state = TimerState::Stopped;
        true
    }

    /// Zero the elapsed value and stop, from any state.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.state = TimerState::Stopped;
    }

    /// Recompute elapsed time against `now`. Ignored while stopped.
    ///
    /// A `now` earlier than the reference instant clamps elapsed to zero.
    pub fn tick(&mut self, now: Millis) {
        if self.state != TimerState::Running {
            return;
        }
        self.elapsed = now.saturating_sub(self.reference);
    }

    pub fn current_elapsed(&self) -> Millis {
        self.elapsed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}
