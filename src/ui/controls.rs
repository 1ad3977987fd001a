use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render(frame: &mut Frame, areas: &[Rect; 3], state: &AppState) {
    let timer_state = state.stopwatch.state();

    for (button, area) in ControlButton::ALL.iter().zip(areas.iter()) {
        let selected = *button == state.selected;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(if selected {
                Theme::border_focused()
            } else {
                Theme::border()
            });

        // Dim buttons that would be a no-op in the current state.
        let mut style = if button.is_effective(timer_state) {
            Theme::button(*button)
        } else {
            Theme::button_inactive()
        };
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }

        let paragraph = Paragraph::new(Span::styled(button.label(), style))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, *area);
    }
}
