//! Key handling for the focused search box
//!
//! Arrow keys walk the dropdown and preview items into the input, Escape
//! hides the dropdown, Enter submits after the deferred hide, and every
//! other key is literal typing: it ends the preview session, goes to the
//! text area, and (re)arms the debounced fetch.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::suggest_state::NavEffect;
use crate::app::App;

pub fn handle_search_box_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => navigate(app, 1, key),
        KeyCode::Up => navigate(app, -1, key),
        KeyCode::Esc => {
            if app.suggest.is_visible() {
                app.suggest.hide();
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Enter => {
            // The dropdown hides just before the submit goes through
            app.schedule_submit();
        }
        _ => literal_key(app, key),
    }
}

fn navigate(app: &mut App, delta: i32, key: KeyEvent) {
    if !app.suggest.is_visible() {
        // No dropdown showing: leave the key to the text area
        app.input.textarea.input(key);
        return;
    }

    let current = app.search_text().to_string();
    match app.suggest.navigate(delta, &current) {
        Some(NavEffect::Preview(text)) => {
            log::debug!("selected {text}");
            app.replace_input_with(&text);
        }
        Some(NavEffect::Restore(text)) => {
            app.replace_input_with(&text);
        }
        None => {
            // At a boundary: default caret behavior stays untouched
            app.input.textarea.input(key);
        }
    }
}

fn literal_key(app: &mut App, key: KeyEvent) {
    // The user is composing fresh text, not navigating
    app.suggest.reset_session();
    if app.input.textarea.input(key) {
        app.debouncer.schedule();
    }
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
