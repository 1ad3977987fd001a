use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed => vec![Action::Quit],
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    // Ticks already queued when the timer stopped are dropped here.
    if !state.stopwatch.is_running() {
        return;
    }
    state.stopwatch.tick();
    state.refresh_readout();
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('s') => vec![Action::Start],
        KeyCode::Char('x') => vec![Action::Stop],
        KeyCode::Char('r') => vec![Action::Reset],
        KeyCode::Char(' ') => vec![Action::Toggle],
        KeyCode::Right | KeyCode::Tab => {
            state.select_next_button();
            vec![]
        }
        KeyCode::Left | KeyCode::BackTab => {
            state.select_prev_button();
            vec![]
        }
        KeyCode::Enter => vec![state.selected.action()],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport, state.config.ui.big_digits);
    let pos = Position::new(mouse.column, mouse.row);
    for (button, area) in ControlButton::ALL.iter().zip(app_layout.buttons.iter()) {
        if area.contains(pos) {
            state.selected = *button;
            return vec![button.action()];
        }
    }
    vec![]
}
