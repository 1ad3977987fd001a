use crate::app::action::Action;
use crate::config::AppConfig;
use crate::stopwatch::format::write_elapsed;
use crate::stopwatch::{format_elapsed, Stopwatch, TimerState};
use ratatui::layout::Rect;

/// The three on-screen controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Start,
    Stop,
    Reset,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [
        ControlButton::Start,
        ControlButton::Stop,
        ControlButton::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Start => "start",
            ControlButton::Stop => "stop",
            ControlButton::Reset => "reset",
        }
    }

    pub fn action(self) -> Action {
        match self {
            ControlButton::Start => Action::Start,
            ControlButton::Stop => Action::Stop,
            ControlButton::Reset => Action::Reset,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ControlButton::Start => ControlButton::Stop,
            ControlButton::Stop => ControlButton::Reset,
            ControlButton::Reset => ControlButton::Start,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ControlButton::Start => ControlButton::Reset,
            ControlButton::Stop => ControlButton::Start,
            ControlButton::Reset => ControlButton::Stop,
        }
    }

    /// Whether pressing this button would change anything right now.
    pub fn is_effective(self, state: TimerState) -> bool {
        match self {
            ControlButton::Start => state == TimerState::Stopped,
            ControlButton::Stop => state == TimerState::Running,
            ControlButton::Reset => true,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub stopwatch: Stopwatch,
    pub selected: ControlButton,
    /// Area of the last rendered frame, used for mouse hit-testing.
    pub viewport: Rect,
    /// Formatted elapsed time, rewritten in place on every refresh.
    pub readout: String,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, stopwatch: Stopwatch) -> Self {
        let readout = format_elapsed(stopwatch.current_elapsed());
        Self {
            config,
            stopwatch,
            selected: ControlButton::Start,
            viewport: Rect::default(),
            readout,
            should_quit: false,
            dirty: true,
        }
    }

    /// Apply a handler action to the stopwatch.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Start => self.stopwatch.start(),
            Action::Stop => self.stopwatch.stop(),
            Action::Reset => self.stopwatch.reset(),
            Action::Toggle => self.stopwatch.toggle(),
            Action::Quit => {
                self.should_quit = true;
                return;
            }
        }
        // Redisplay the frozen or zeroed value right away.
        self.refresh_readout();
    }

    pub fn refresh_readout(&mut self) {
        write_elapsed(&mut self.readout, self.stopwatch.current_elapsed());
        self.dirty = true;
    }

    pub fn select_next_button(&mut self) {
        self.selected = self.selected.next();
        self.dirty = true;
    }

    pub fn select_prev_button(&mut self) {
        self.selected = self.selected.prev();
        self.dirty = true;
    }

    pub fn status_line(&self) -> &'static str {
        match self.stopwatch.state() {
            TimerState::Running => "RUNNING",
            TimerState::Stopped if self.stopwatch.current_elapsed() == 0 => "READY",
            TimerState::Stopped => "STOPPED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::clock::ManualClock;
    use crate::stopwatch::scheduler::ManualScheduler;
    use std::sync::Arc;

    fn test_state() -> (AppState, ManualClock) {
        let clock = ManualClock::new(1_000);
        let stopwatch = Stopwatch::new(
            Arc::new(clock.clone()),
            Box::new(ManualScheduler::new()),
            || {},
        );
        (AppState::new(AppConfig::default(), stopwatch), clock)
    }

    #[test]
    fn actions_drive_stopwatch_and_readout() {
        let (mut state, clock) = test_state();
        assert_eq!(state.readout, "00:00:00:00");

        state.apply(Action::Start);
        assert!(state.stopwatch.is_running());
        clock.advance(1_230);
        state.stopwatch.tick();

        state.dirty = false;
        state.apply(Action::Stop);
        assert!(state.dirty);
        assert_eq!(state.readout, "00:00:01:23");

        state.apply(Action::Reset);
        assert_eq!(state.readout, "00:00:00:00");
        assert_eq!(state.status_line(), "READY");

        state.apply(Action::Toggle);
        assert!(state.stopwatch.is_running());
    }

    #[test]
    fn quit_sets_flag_only() {
        let (mut state, _) = test_state();
        state.apply(Action::Quit);
        assert!(state.should_quit);
        assert!(!state.stopwatch.is_running());
    }

    #[test]
    fn button_selection_wraps() {
        let mut b = ControlButton::Start;
        for _ in 0..3 {
            b = b.next();
        }
        assert_eq!(b, ControlButton::Start);
        assert_eq!(ControlButton::Start.prev(), ControlButton::Reset);
        assert_eq!(ControlButton::Reset.next(), ControlButton::Start);
    }

    #[test]
    fn buttons_map_to_actions() {
        let actions: Vec<_> = ControlButton::ALL.iter().map(|b| b.action()).collect();
        assert_eq!(actions, vec![Action::Start, Action::Stop, Action::Reset]);
    }

    #[test]
    fn effective_buttons_follow_timer_state() {
        assert!(ControlButton::Start.is_effective(TimerState::Stopped));
        assert!(!ControlButton::Start.is_effective(TimerState::Running));
        assert!(ControlButton::Stop.is_effective(TimerState::Running));
        assert!(!ControlButton::Stop.is_effective(TimerState::Stopped));
        assert!(ControlButton::Reset.is_effective(TimerState::Running));
    }
}
