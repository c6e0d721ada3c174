//! Suggestion session state
//!
//! Owns everything the dropdown needs to behave deterministically: the
//! last-loaded item list, the exclusive selection marker, the cached user
//! input preserved during preview navigation, the visibility and
//! active-style flags, and the request generation counter that shields the
//! list from stale fetch responses. The rendered dropdown and the input
//! border are pure projections of this state.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

/// One selectable entry in the dropdown. Server response order is
/// navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub text: String,
}

impl SuggestionItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Request messages sent to the fetch worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    Fetch {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        /// Cancelled when a newer request or a hide supersedes this one
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the fetch worker thread
#[derive(Debug)]
pub enum SuggestResponse {
    /// The fetch resolved and the fragment parsed into items
    Loaded {
        items: Vec<SuggestionItem>,
        request_id: u64,
    },
    /// The fetch rejected (connect error or non-success status)
    Failed { reason: String, request_id: u64 },
    /// The worker thread died; reported so the UI can warn once
    WorkerCrashed(String),
}

/// What a navigation step asks the caller to do with the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Write the newly selected item's text into the input
    Preview(String),
    /// Navigated back above the top of the list: restore the user's own text
    Restore(String),
}

/// Session state for the suggestion dropdown
pub struct SuggestState {
    items: Vec<SuggestionItem>,
    /// Selection marker; `None` is the "no selection" position above the
    /// top of the list. Exclusive by construction.
    selected: Option<usize>,
    /// The text the user actually typed, captured on the first arrow press
    /// of a navigation session and restored when navigating back above the
    /// top. Reset by literal keystrokes and by every fresh load.
    cached_input: Option<String>,
    visible: bool,
    /// The search-box-active style flag, projected onto the input border
    active: bool,
    /// Generation counter; responses stamped with an older id are discarded
    request_id: u64,
    in_flight: Option<(u64, CancellationToken)>,
    request_tx: Option<Sender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            cached_input: None,
            visible: false,
            active: false,
            request_id: 0,
            in_flight: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Ask the worker for suggestions matching `query`.
    ///
    /// Queries shorter than `min_query_len` are not worth fetching: the
    /// dropdown is hidden and no request goes out. A new request cancels
    /// whatever was in flight and bumps the generation counter so a slow
    /// earlier response can no longer overwrite the list.
    ///
    /// Returns true if a request was actually sent.
    pub fn request_suggestions(&mut self, query: &str, min_query_len: usize) -> bool {
        if query.chars().count() < min_query_len {
            log::debug!("query '{query}' below minimum length, hiding suggestions");
            self.hide();
            return false;
        }

        let Some(tx) = &self.request_tx else {
            return false;
        };

        if let Some((_, token)) = self.in_flight.take() {
            token.cancel();
        }

        self.request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        let request = SuggestRequest::Fetch {
            query: query.to_string(),
            request_id: self.request_id,
            cancel_token: cancel_token.clone(),
        };

        log::debug!("loading suggestions for '{query}' (request {})", self.request_id);
        if tx.send(request).is_err() {
            return false;
        }
        self.in_flight = Some((self.request_id, cancel_token));
        true
    }

    /// Pull one worker response off the channel, if any
    pub fn try_recv_response(&mut self) -> Option<SuggestResponse> {
        self.response_rx.as_ref()?.try_recv().ok()
    }

    /// Apply a worker response to the session state.
    ///
    /// A `Loaded` list replaces the items wholesale and starts a fresh
    /// navigation session (no marker, no cached input). A `Failed` fetch
    /// hides the dropdown and clears the active flag, leaving the input
    /// untouched. Responses from a superseded generation are discarded.
    pub fn apply_response(&mut self, response: SuggestResponse) {
        match response {
            SuggestResponse::Loaded { items, request_id } => {
                if request_id != self.request_id {
                    log::debug!(
                        "discarding stale suggestion response {request_id} (current {})",
                        self.request_id
                    );
                    return;
                }
                self.in_flight = None;
                self.items = items;
                self.selected = None;
                self.cached_input = None;
                if self.items.is_empty() {
                    self.hide();
                } else {
                    self.visible = true;
                    self.active = true;
                }
            }
            SuggestResponse::Failed { reason, request_id } => {
                if request_id != self.request_id {
                    return;
                }
                log::debug!("suggestion fetch failed: {reason}");
                self.in_flight = None;
                self.hide();
            }
            SuggestResponse::WorkerCrashed(reason) => {
                log::error!("suggestion worker crashed: {reason}");
                self.in_flight = None;
                self.hide();
            }
        }
    }

    /// Move the selection marker by `delta` positions.
    ///
    /// The marker walks the range `-1..items.len()`, where -1 is the
    /// "no selection" position (`selected == None`). At a boundary the move
    /// is a no-op and `None` is returned so the caller can leave the key's
    /// default behavior alone. The first move of a session captures
    /// `current_input` before any preview overwrites it; moving back above
    /// the top hands it back via `NavEffect::Restore` and ends the session.
    pub fn navigate(&mut self, delta: i32, current_input: &str) -> Option<NavEffect> {
        let len = self.items.len() as i32;
        let current = self.selected.map_or(-1, |i| i as i32);
        let next = (current + delta).clamp(-1, len - 1);

        if next == current {
            return None;
        }

        if next >= 0 {
            if self.cached_input.is_none() {
                self.cached_input = Some(current_input.to_string());
            }
            self.selected = Some(next as usize);
            Some(NavEffect::Preview(self.items[next as usize].text.clone()))
        } else {
            self.selected = None;
            let restored = self.cached_input.take().unwrap_or_default();
            Some(NavEffect::Restore(restored))
        }
    }

    /// A literal keystroke ends the preview session: the user is composing
    /// fresh text, not navigating.
    pub fn reset_session(&mut self) {
        self.cached_input = None;
    }

    /// Hide the dropdown and clear the active-style flag. Idempotent.
    ///
    /// A hide supersedes any in-flight fetch: the request is cancelled and
    /// the generation bumped, so a response already on its way back cannot
    /// re-open the dropdown.
    pub fn hide(&mut self) {
        if let Some((_, token)) = self.in_flight.take() {
            token.cancel();
            self.request_id = self.request_id.wrapping_add(1);
        }
        if self.visible {
            log::debug!("hiding suggestions");
        }
        self.visible = false;
        self.active = false;
        self.selected = None;
        self.cached_input = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[allow(dead_code)] // Used in tests
    pub fn selected_item(&self) -> Option<&SuggestionItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    #[allow(dead_code)] // Used in tests
    pub fn cached_input(&self) -> Option<&str> {
        self.cached_input.as_deref()
    }

    #[allow(dead_code)] // Used in tests
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    #[allow(dead_code)] // Used in tests
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
