use crate::ui::display::GLYPH_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the centered stopwatch panel.
const PANEL_WIDTH: u16 = 48;
const BUTTON_ROW_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub display: Rect,
    /// Start, stop, reset, left to right.
    pub buttons: [Rect; 3],
    pub status_bar: Rect,
}

fn display_height(big_digits: bool) -> u16 {
    // Borders add two rows.
    if big_digits {
        GLYPH_HEIGHT + 2
    } else {
        3
    }
}

pub fn compute_layout(area: Rect, big_digits: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Vertically centered: display | buttons
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(display_height(big_digits)),
            Constraint::Length(BUTTON_ROW_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(content);

    let display = center_horizontally(v_chunks[1]);
    let controls = center_horizontally(v_chunks[2]);

    let b_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(controls);

    AppLayout {
        display,
        buttons: [b_chunks[0], b_chunks[1], b_chunks[2]],
        status_bar,
    }
}

fn center_horizontally(row: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(PANEL_WIDTH),
            Constraint::Fill(1),
        ])
        .split(row)[1]
}
