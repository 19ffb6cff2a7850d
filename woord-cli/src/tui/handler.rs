use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, AppMode};

/// Map key events to actions based on current mode
pub fn handle_key(key: KeyEvent, mode: AppMode) -> Action {
    // Quit works everywhere
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        _ => {}
    }

    match mode {
        AppMode::Loading => Action::Tick,
        AppMode::Selecting => handle_key_selecting(key),
        AppMode::Viewing => handle_key_viewing(key),
    }
}

fn handle_key_selecting(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter => Action::Confirm,
        _ => Action::Tick,
    }
}

fn handle_key_viewing(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('s') => Action::ToggleSwap,
        KeyCode::Char('b') | KeyCode::Backspace => Action::Back,

        // Viewport scrolling
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,

        _ => Action::Tick,
    }
}
