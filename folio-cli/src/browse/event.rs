//! Event handling for the browser

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::Listable;

use super::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key<T: Listable>(app: &mut App<T>, key: KeyEvent) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<T: Listable>(app: &mut App<T>, key: KeyEvent) -> HandleResult {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.select_first();
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
            HandleResult::Continue
        }
        KeyCode::PageDown => {
            for _ in 0..app.viewport_rows.max(1) {
                app.select_next();
            }
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            for _ in 0..app.viewport_rows.max(1) {
                app.select_prev();
            }
            HandleResult::Continue
        }

        KeyCode::Char('/') => {
            app.enter_search();
            HandleResult::Continue
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.clear_search();
            }
            HandleResult::Continue
        }

        KeyCode::Enter => {
            app.open_selected();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys in search mode
fn handle_search_mode<T: Listable>(app: &mut App<T>, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.clear_search();
            app.exit_mode();
        }
        KeyCode::Enter | KeyCode::Down => {
            app.exit_mode();
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_insert(c),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        _ => {}
    }
    HandleResult::Continue
}
