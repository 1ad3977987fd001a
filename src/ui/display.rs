//! The elapsed-time readout.
//!
//! Renders `HH:MM:SS:CC` either as plain text or, when `ui.big_digits` is set
//! and the panel has room, as five-row block glyphs.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const GLYPH_HEIGHT: u16 = 5;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT as usize]> {
    let rows = match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => ["  #", "  #", "  #", "  #", "  #"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        _ => return None,
    };
    Some(rows)
}

/// Lay out `text` as rows of block glyphs, one space between characters.
/// Characters without a glyph are skipped.
pub fn big_lines(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
                .replace('#', "█")
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let running = state.stopwatch.is_running();
    let block = Block::default()
        .title(" Stopwatch ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if running {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = state.readout.as_str();
    let style = if running {
        Theme::display_running()
    } else {
        Theme::display_stopped()
    };

    let lines: Vec<Line> = if state.config.ui.big_digits && inner.height >= GLYPH_HEIGHT {
        let big = big_lines(text);
        let width = big.first().map(|l| l.chars().count()).unwrap_or(0);
        if width <= inner.width as usize {
            big.into_iter().map(|l| Line::styled(l, style)).collect()
        } else {
            vec![Line::styled(text, style)]
        }
    } else {
        vec![Line::styled(text, style)]
    };

    // Center the readout vertically within the block.
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, body);
}
