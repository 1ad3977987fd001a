use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = "s start  x stop  r reset  space toggle  ←/→ select  enter press  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let state_style = if state.stopwatch.is_running() {
        Theme::status_running()
    } else {
        Theme::status_stopped()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), state_style));

    if state.config.ui.show_key_hints {
        parts.push(Span::styled(format!(" {} ", KEY_HINTS), Theme::key_hint()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
