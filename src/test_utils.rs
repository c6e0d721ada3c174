//! Shared test utilities for siq
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::suggest::{SuggestResponse, SuggestionItem};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn items(texts: &[&str]) -> Vec<SuggestionItem> {
        texts.iter().map(|t| SuggestionItem::new(*t)).collect()
    }

    /// App with text typed into the search box and a loaded suggestion
    /// list, as if a fetch for that text just resolved.
    pub fn app_with_suggestions(typed: &str, texts: &[&str]) -> App {
        let mut app = test_app();
        app.input.textarea.insert_str(typed);
        app.suggest.apply_response(SuggestResponse::Loaded {
            items: items(texts),
            request_id: app.suggest.current_request_id(),
        });
        app
    }
}
