use crate::app::state::ControlButton;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_running() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn display_stopped() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button(button: ControlButton) -> Style {
        let color = match button {
            ControlButton::Start => Color::Green,
            ControlButton::Stop => Color::Red,
            ControlButton::Reset => Color::Blue,
        };
        Style::default().fg(color)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_running() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_stopped() -> Style {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
