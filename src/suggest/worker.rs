//! Suggestion fetch worker thread
//!
//! Handles suggestion requests in a background thread so fetches never
//! block the UI. Receives requests via channel, performs the HTTP call,
//! parses the fragment, and reports a `Loaded`/`Failed` result back —
//! only once the fetch actually resolves.
//!
//! Uses a tokio runtime for async HTTP with cancellation support and
//! panic handling so a crashing fetch cannot corrupt the TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use reqwest::Url;
use tokio_util::sync::CancellationToken;

use super::fragment;
use super::suggest_state::{SuggestRequest, SuggestResponse};
use crate::error::SiqError;

/// Resolved location of the suggestion endpoint.
#[derive(Debug, Clone)]
pub struct SuggestEndpoint {
    suggest_url: Url,
}

impl SuggestEndpoint {
    /// Parse and validate a base URL, resolving the `suggest` path under it.
    ///
    /// The query value itself is attached per request as a properly encoded
    /// query parameter.
    pub fn new(base: &str) -> Result<Self, SiqError> {
        let mut parsed = Url::parse(base).map_err(|e| SiqError::InvalidEndpoint {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SiqError::InvalidEndpoint {
                url: base.to_string(),
                reason: "only http and https endpoints are supported".to_string(),
            });
        }

        // Treat the base as a directory so `suggest` appends to its path
        // instead of replacing the last segment
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        let suggest_url = parsed.join("suggest").map_err(|e| SiqError::InvalidEndpoint {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { suggest_url })
    }

    pub fn suggest_url(&self) -> &Url {
        &self.suggest_url
    }
}

/// Spawn the suggestion worker thread.
///
/// Creates a background thread with a tokio runtime that listens for
/// requests on the request channel, fetches the suggestion fragment with
/// cancellation support, and sends parsed results back via the response
/// channel. The thread installs a panic hook so a panic is reported over
/// the channel instead of being printed over the TUI.
pub fn spawn_worker(
    endpoint: SuggestEndpoint,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in suggest worker".to_string()
            };

            log::error!(
                "suggest worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = response_tx_clone.send(SuggestResponse::WorkerCrashed(panic_msg));
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Single-threaded runtime is plenty: one fetch at a time
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(endpoint, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("suggest worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until the channel is closed.
///
/// Blocking `recv()` on the request channel is fine in a dedicated thread.
async fn worker_loop(
    endpoint: SuggestEndpoint,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let client = reqwest::Client::new();

    while let Ok(request) = request_rx.recv() {
        match request {
            SuggestRequest::Fetch {
                query,
                request_id,
                cancel_token,
            } => {
                handle_fetch(
                    &client,
                    &endpoint,
                    &query,
                    request_id,
                    cancel_token,
                    &response_tx,
                )
                .await;
            }
        }
    }
}

/// Fetch the suggestion fragment for one query.
///
/// The success continuation runs only when the fetch resolves, the failure
/// one only when it rejects; a cancelled fetch reports nothing at all (the
/// requester has already moved on).
async fn handle_fetch(
    client: &reqwest::Client,
    endpoint: &SuggestEndpoint,
    query: &str,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: &Sender<SuggestResponse>,
) {
    if cancel_token.is_cancelled() {
        return;
    }

    let fetch = async {
        let response = client
            .get(endpoint.suggest_url().clone())
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    };

    tokio::select! {
        biased;
        _ = cancel_token.cancelled() => {
            log::debug!("suggestion fetch {request_id} cancelled");
        }
        result = fetch => {
            let response = match result {
                Ok(body) => SuggestResponse::Loaded {
                    items: fragment::parse_items(&body),
                    request_id,
                },
                Err(e) => SuggestResponse::Failed {
                    reason: e.to_string(),
                    request_id,
                },
            };
            let _ = response_tx.send(response);
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
