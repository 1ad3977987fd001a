//! Periodic callback sources.
//!
//! The stopwatch only needs "call this every N ms until cancelled". The
//! [`Scheduler`] trait hides whether that comes from a tokio task, a thread,
//! or a test harness firing callbacks by hand.

use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Identifies one periodic source returned by [`Scheduler::schedule_periodic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

pub trait Scheduler {
    /// Invoke `callback` every `interval` until the returned source is cancelled.
    fn schedule_periodic(&mut self, interval: Duration, callback: TickCallback) -> SourceId;

    /// Stop a source. Cancelling an unknown or already cancelled source is a no-op.
    fn cancel(&mut self, id: SourceId);

    /// Number of sources currently scheduled.
    fn active_sources(&self) -> usize;
}

/// Runs each periodic source as a tokio task driven by `tokio::time::interval`.
///
/// Must be used from within a tokio runtime.
#[derive(Default)]
pub struct TokioScheduler {
    next_id: u64,
    tasks: HashMap<SourceId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_periodic(&mut self, interval: Duration, mut callback: TickCallback) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(interval);
            // A stalled loop should not fire a burst of catch-up ticks.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                callback();
            }
        });
        self.tasks.insert(id, handle);
        tracing::debug!(source = id.0, ?interval, "periodic source scheduled");
        id
    }

    fn cancel(&mut self, id: SourceId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
            tracing::debug!(source = id.0, "periodic source cancelled");
        }
    }

    fn active_sources(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

/// Scheduler whose sources fire only when [`ManualScheduler::fire_all`] is called.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    sources: HashMap<SourceId, (Duration, TickCallback)>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every active callback once.
    pub fn fire_all(&mut self) {
        for (_, callback) in self.sources.values_mut() {
            callback();
        }
    }

    pub fn intervals(&self) -> Vec<Duration> {
        self.sources.values().map(|(interval, _)| *interval).collect()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule_periodic(&mut self, interval: Duration, callback: TickCallback) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;
        self.sources.insert(id, (interval, callback));
        id
    }

    fn cancel(&mut self, id: SourceId) {
        self.sources.remove(&id);
    }

    fn active_sources(&self) -> usize {
        self.sources.len()
    }
}
