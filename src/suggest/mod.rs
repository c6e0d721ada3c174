//! Suggestion dropdown: server-backed autocomplete for the search box.
//!
//! The pieces cooperate through `SuggestState`, the single session-state
//! object: the fetch worker fills it over a channel, the key handlers
//! navigate it, and the render module projects it onto the screen.

pub mod debouncer;
pub mod fragment;
pub mod suggest_events;
pub mod suggest_render;
pub mod suggest_state;
pub mod worker;

pub use debouncer::Debouncer;
pub use suggest_state::{NavEffect, SuggestRequest, SuggestResponse, SuggestState, SuggestionItem};
pub use worker::SuggestEndpoint;
