use crate::config::{Config, SuggestConfig};
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::suggest::{Debouncer, SuggestResponse, SuggestState};

/// Which part of the page has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBox,
    Page,
}

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the submitted search text (Enter)
    Query,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub focus: Focus,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Collapses typing bursts into one suggestion fetch
    pub debouncer: Debouncer,
    /// Deferred dropdown hide between Enter and exit
    pub submit_timer: Debouncer,
    pub notification: NotificationState,
    pub config: SuggestConfig,
}

impl App {
    /// Create a new App instance from the loaded configuration
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(),
            focus: Focus::SearchBox,
            output_mode: None,
            should_quit: false,
            debouncer: Debouncer::new(config.suggest.debounce_ms),
            submit_timer: Debouncer::new(config.suggest.submit_hide_delay_ms),
            notification: NotificationState::new(),
            config: config.suggest.clone(),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the output mode (if set)
    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Get the current search box text
    pub fn search_text(&self) -> &str {
        self.input.query()
    }

    /// Replace the search box content wholesale (suggestion preview or
    /// restore). Does not arm the debouncer: programmatic writes are not
    /// typing.
    pub fn replace_input_with(&mut self, text: &str) {
        self.input.textarea.delete_line_by_head();
        self.input.textarea.delete_line_by_end();
        self.input.textarea.insert_str(text);
    }

    /// Focus the search box and load suggestions for whatever text is
    /// already present.
    pub fn focus_search_box(&mut self) {
        self.focus = Focus::SearchBox;
        log::debug!("search box focused");
        let query = self.search_text().to_string();
        self.suggest
            .request_suggestions(&query, self.config.min_query_len);
    }

    /// Move focus to the page body; the dropdown does not survive losing
    /// focus.
    pub fn blur_search_box(&mut self) {
        self.focus = Focus::Page;
        self.suggest.hide();
    }

    /// Arm the deferred submit: the dropdown hides first, then the app
    /// exits with the search text.
    pub fn schedule_submit(&mut self) {
        self.submit_timer.schedule();
    }

    /// Fire any elapsed deadline: the debounced fetch and the deferred
    /// submit hide.
    pub fn process_timers(&mut self) {
        if self.debouncer.should_fire() {
            let query = self.search_text().to_string();
            self.suggest
                .request_suggestions(&query, self.config.min_query_len);
            self.debouncer.mark_fired();
        }

        if self.submit_timer.should_fire() {
            self.submit_timer.mark_fired();
            self.suggest.hide();
            self.output_mode = Some(OutputMode::Query);
            self.should_quit = true;
        }
    }

    /// Drain worker responses into the suggestion state.
    pub fn poll_suggest_responses(&mut self) {
        while let Some(response) = self.suggest.try_recv_response() {
            if let SuggestResponse::WorkerCrashed(reason) = &response {
                self.notification
                    .show_warning(&format!("Suggestions unavailable: {reason}"));
            }
            self.suggest.apply_response(response);
        }
    }
}
