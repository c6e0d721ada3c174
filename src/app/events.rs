use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{App, Focus};
use crate::suggest::suggest_events;

/// Timeout for event polling - keeps timers and worker responses serviced
/// while the user is idle
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Elapsed deadlines first: the debounced fetch and the deferred
        // submit hide
        self.process_timers();
        if self.should_quit {
            return Ok(());
        }

        self.poll_suggest_responses();
        self.notification.clear_if_expired();

        // Poll with timeout so responses arriving while idle still render
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle paste events from bracketed paste mode.
    /// Pasting is typing in one gulp: the preview session ends and the
    /// fetch goes out immediately (no debounce).
    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::SearchBox {
            return;
        }

        self.suggest.reset_session();
        self.input.textarea.insert_str(&text);

        let query = self.search_text().to_string();
        self.suggest
            .request_suggestions(&query, self.config.min_query_len);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global keys first
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            match self.focus {
                Focus::SearchBox => self.blur_search_box(),
                Focus::Page => self.focus_search_box(),
            }
            return;
        }

        // Not a global key, delegate to the focused area
        match self.focus {
            Focus::SearchBox => suggest_events::handle_search_box_key(self, key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    /// Handle keys when the page body is focused
    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => {
                self.focus_search_box();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{app_with_suggestions, key, key_with_mods, test_app};

    #[test]
    fn test_ctrl_c_quits_without_output() {
        let mut app = test_app();

        app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit());
        assert_eq!(app.output_mode(), None);
    }

    #[test]
    fn test_tab_blurs_search_box_and_hides_dropdown() {
        let mut app = app_with_suggestions("abc", &["abcd"]);
        assert!(app.suggest.is_visible());

        app.handle_key_event(key(KeyCode::Tab));

        assert_eq!(app.focus, Focus::Page);
        assert!(!app.suggest.is_visible());
        assert!(!app.suggest.is_active());
    }

    #[test]
    fn test_tab_from_page_refocuses_search_box() {
        let mut app = test_app();
        app.focus = Focus::Page;

        app.handle_key_event(key(KeyCode::Tab));

        assert_eq!(app.focus, Focus::SearchBox);
    }

    #[test]
    fn test_page_q_quits() {
        let mut app = test_app();
        app.focus = Focus::Page;

        app.handle_key_event(key(KeyCode::Char('q')));

        assert!(app.should_quit());
    }

    #[test]
    fn test_page_slash_focuses_search_box() {
        let mut app = test_app();
        app.focus = Focus::Page;

        app.handle_key_event(key(KeyCode::Char('/')));

        assert_eq!(app.focus, Focus::SearchBox);
    }

    #[test]
    fn test_typing_in_page_focus_does_not_touch_input() {
        let mut app = test_app();
        app.focus = Focus::Page;

        app.handle_key_event(key(KeyCode::Char('x')));

        assert_eq!(app.search_text(), "");
    }

    #[test]
    fn test_paste_inserts_text_at_once() {
        let mut app = test_app();

        app.handle_paste_event("city council".to_string());

        assert_eq!(app.search_text(), "city council");
    }

    #[test]
    fn test_paste_outside_search_box_is_ignored() {
        let mut app = test_app();
        app.focus = Focus::Page;

        app.handle_paste_event("ignored".to_string());

        assert_eq!(app.search_text(), "");
    }

    #[test]
    fn test_paste_ends_preview_session() {
        let mut app = app_with_suggestions("abc", &["abcd"]);
        app.handle_key_event(key(KeyCode::Down));
        assert!(app.suggest.cached_input().is_some());

        app.handle_paste_event("xyz".to_string());

        assert!(app.suggest.cached_input().is_none());
    }
}
