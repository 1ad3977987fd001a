//! A [`TimerController`] wired to a clock and a periodic tick source.

use super::clock::Clock;
use super::controller::{TimerController, TimerState};
use super::scheduler::{Scheduler, SourceId};
use super::Millis;
use std::sync::Arc;
use std::time::Duration;

/// Refresh cadence while running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

type TickNotify = Arc<dyn Fn() + Send + Sync>;

/// Owns the timer and its periodic source.
///
/// A source is scheduled only on an actual Stopped -> Running transition and
/// cancelled on stop, reset and drop, so at most one is ever active. The
/// source itself only calls `on_tick`; the owner is expected to respond by
/// calling [`Stopwatch::tick`] on the thread that owns the stopwatch.
pub struct Stopwatch {
    controller: TimerController,
    clock: Arc<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    on_tick: TickNotify,
    source: Option<SourceId>,
}

impl Stopwatch {
    pub fn new<F>(clock: Arc<dyn Clock>, scheduler: Box<dyn Scheduler>, on_tick: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            controller: TimerController::new(clock.clone()),
            clock,
            scheduler,
            on_tick: Arc::new(on_tick),
            source: None,
        }
    }

    pub fn start(&mut self) {
        if !self.controller.start() {
            return;
        }
        let notify = self.on_tick.clone();
        let id = self
            .scheduler
            .schedule_periodic(TICK_INTERVAL, Box::new(move || notify()));
        self.source = Some(id);
        debug_assert_eq!(self.scheduler.active_sources(), 1);
        tracing::info!(elapsed_ms = self.controller.current_elapsed(), "stopwatch started");
    }

    pub fn stop(&mut self) {
        if !self.controller.stop() {
            return;
        }
        self.cancel_source();
        tracing::info!(elapsed_ms = self.controller.current_elapsed(), "stopwatch stopped");
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.cancel_source();
        tracing::info!("stopwatch reset");
    }

    /// Start if stopped, stop if running.
    pub fn toggle(&mut self) {
        match self.controller.state() {
            TimerState::Stopped => self.start(),
            TimerState::Running => self.stop(),
        }
    }

    /// Recompute elapsed time from the clock. Ignored while stopped.
    pub fn tick(&mut self) {
        self.controller.tick(self.clock.now_ms());
    }

    pub fn current_elapsed(&self) -> Millis {
        self.controller.current_elapsed()
    }

    pub fn state(&self) -> TimerState {
        self.controller.state()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    fn cancel_source(&mut self) {
        if let Some(id) = self.source.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.cancel_source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::clock::ManualClock;
    use crate::stopwatch::scheduler::{ManualScheduler, TickCallback};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scheduler handle shared between the stopwatch and the test body.
    #[derive(Clone, Default)]
    struct SharedScheduler(Arc<Mutex<ManualScheduler>>);

    impl SharedScheduler {
        fn fire_all(&self) {
            self.0.lock().unwrap().fire_all();
        }

        fn active(&self) -> usize {
            self.0.lock().unwrap().active_sources()
        }
    }

    impl Scheduler for SharedScheduler {
        fn schedule_periodic(&mut self, interval: Duration, callback: TickCallback) -> SourceId {
            self.0.lock().unwrap().schedule_periodic(interval, callback)
        }

        fn cancel(&mut self, id: SourceId) {
            self.0.lock().unwrap().cancel(id)
        }

        fn active_sources(&self) -> usize {
            self.active()
        }
    }

    struct Harness {
        clock: ManualClock,
        sched: SharedScheduler,
        ticks: Arc<AtomicUsize>,
        watch: Stopwatch,
    }

    impl Harness {
        fn new() -> Self {
            let clock = ManualClock::new(50_000);
            let sched = SharedScheduler::default();
            let ticks = Arc::new(AtomicUsize::new(0));
            let t = ticks.clone();
            let watch = Stopwatch::new(Arc::new(clock.clone()), Box::new(sched.clone()), move || {
                t.fetch_add(1, Ordering::SeqCst);
            });
            Self {
                clock,
                sched,
                ticks,
                watch,
            }
        }

        /// Advance 10ms at a time, firing the source and ticking on each
        /// notification the way the event loop does.
        fn run_for(&mut self, ms: Millis) {
            for _ in 0..ms / 10 {
                self.clock.advance(10);
                let before = self.ticks.load(Ordering::SeqCst);
                self.sched.fire_all();
                for _ in before..self.ticks.load(Ordering::SeqCst) {
                    self.watch.tick();
                }
            }
        }
    }

    #[test]
    fn start_schedules_one_ten_ms_source() {
        let mut h = Harness::new();
        h.watch.start();
        h.watch.start();
        assert_eq!(h.sched.active(), 1);
        assert_eq!(
            h.sched.0.lock().unwrap().intervals(),
            vec![Duration::from_millis(10)]
        );
    }

    #[test]
    fn elapsed_follows_ticks_and_stop_cancels_source() {
        let mut h = Harness::new();
        h.watch.start();
        h.run_for(150);
        assert!(h.watch.current_elapsed().abs_diff(150) <= 10);

        h.watch.stop();
        h.watch.stop();
        assert_eq!(h.sched.active(), 0);

        let frozen = h.watch.current_elapsed();
        h.run_for(100);
        h.watch.tick();
        assert_eq!(h.watch.current_elapsed(), frozen);
    }

    #[test]
    fn resume_continues_from_frozen_value() {
        let mut h = Harness::new();
        h.watch.start();
        h.run_for(300);
        h.watch.stop();
        h.clock.advance(2_000);
        h.watch.start();
        h.run_for(200);
        assert_eq!(h.watch.current_elapsed(), 500);
        assert_eq!(h.sched.active(), 1);
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut h = Harness::new();
        h.watch.start();
        h.run_for(90);
        h.watch.reset();
        assert_eq!(h.watch.state(), TimerState::Stopped);
        assert_eq!(h.watch.current_elapsed(), 0);
        assert_eq!(h.sched.active(), 0);

        h.watch.reset();
        assert_eq!(h.watch.current_elapsed(), 0);
    }

    #[test]
    fn toggle_alternates() {
        let mut h = Harness::new();
        h.watch.toggle();
        assert!(h.watch.is_running());
        h.watch.toggle();
        assert!(!h.watch.is_running());
        assert_eq!(h.sched.active(), 0);
    }

    #[test]
    fn drop_cancels_active_source() {
        let h = Harness::new();
        let Harness {
            sched,
            ticks,
            mut watch,
            ..
        } = h;
        watch.start();
        assert_eq!(sched.active(), 1);
        drop(watch);
        assert_eq!(sched.active(), 0);
        sched.fire_all();
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }
}
