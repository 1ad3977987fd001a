mod controls;
mod display;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.big_digits);

    display::render(frame, app_layout.display, state);
    controls::render(frame, &app_layout.buttons, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::stopwatch::clock::ManualClock;
    use crate::stopwatch::scheduler::ManualScheduler;
    use crate::stopwatch::Stopwatch;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn state_with(big_digits: bool) -> (AppState, ManualClock) {
        let clock = ManualClock::new(0);
        let stopwatch = Stopwatch::new(
            Arc::new(clock.clone()),
            Box::new(ManualScheduler::new()),
            || {},
        );
        let mut config = AppConfig::default();
        config.ui.big_digits = big_digits;
        (AppState::new(config, stopwatch), clock)
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_plain_display_and_buttons() {
        let (state, _) = state_with(false);
        let screen = draw(&state, 80, 24);
        assert!(screen.contains("00:00:00:00"));
        assert!(screen.contains("start"));
        assert!(screen.contains("stop"));
        assert!(screen.contains("reset"));
        assert!(screen.contains("READY"));
    }

    #[test]
    fn renders_running_elapsed_time() {
        let (mut state, clock) = state_with(false);
        state.stopwatch.start();
        clock.advance(3_723_450);
        state.stopwatch.tick();
        state.refresh_readout();
        let screen = draw(&state, 80, 24);
        assert!(screen.contains("01:02:03:45"));
        assert!(screen.contains("RUNNING"));
    }

    #[test]
    fn big_digits_fall_back_when_too_narrow() {
        let (state, _) = state_with(true);
        assert!(draw(&state, 80, 24).contains('█'));

        let narrow = draw(&state, 30, 24);
        assert!(!narrow.contains('█'));
        assert!(narrow.contains("00:00:00:00"));
    }
}
