//! Search Worker Thread
//!
//! Waits out the synthesis delay off the UI thread. Requests arrive on a
//! channel, batches go back on another. The delay is spent in
//! `recv_timeout`, so a cancel or a closed request channel ends the wait
//! early and nothing is sent for that request.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::research::{BoxedSource, KeywordResult, generate_batch};

/// Messages from the UI thread to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Generate { query: String, request_id: u64 },
    Cancel { request_id: u64 },
}

/// Messages from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Completed {
        request_id: u64,
        results: Vec<KeywordResult>,
    },
    Cancelled {
        request_id: u64,
    },
}

enum DelayOutcome {
    Elapsed,
    Cancelled,
    Disconnected,
}

/// Spawn the search worker thread
///
/// The thread exits once every `SearchRequest` sender has been dropped.
pub fn spawn_worker(
    delay: Duration,
    source: BoxedSource,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(delay, source, request_rx, response_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    delay: Duration,
    mut source: BoxedSource,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SearchRequest::Generate { query, request_id } => {
                match wait_for_delay(delay, request_id, &request_rx, &response_tx) {
                    DelayOutcome::Elapsed => {
                        let results = generate_batch(&query, &mut *source);
                        log::debug!(
                            "Generated {} results for request {}",
                            results.len(),
                            request_id
                        );
                        if response_tx
                            .send(SearchResponse::Completed {
                                request_id,
                                results,
                            })
                            .is_err()
                        {
                            break;
                        }
                    }
                    DelayOutcome::Cancelled => {}
                    DelayOutcome::Disconnected => break,
                }
            }
            SearchRequest::Cancel { request_id } => {
                // Nothing in flight; acknowledge so the caller can settle
                let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                log::debug!("Cancelled request {} (no active request)", request_id);
            }
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Block for `delay`, watching the request channel for a matching cancel
fn wait_for_delay(
    delay: Duration,
    request_id: u64,
    request_rx: &Receiver<SearchRequest>,
    response_tx: &Sender<SearchResponse>,
) -> DelayOutcome {
    let deadline = Instant::now() + delay;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return DelayOutcome::Elapsed;
        }

        match request_rx.recv_timeout(remaining) {
            Ok(SearchRequest::Cancel { request_id: id }) if id == request_id => {
                let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                log::debug!("Cancelled request {} during delay", request_id);
                return DelayOutcome::Cancelled;
            }
            Ok(SearchRequest::Cancel { request_id: id }) => {
                log::debug!(
                    "Ignoring cancel for request {} (current: {})",
                    id,
                    request_id
                );
            }
            Ok(SearchRequest::Generate { request_id: id, .. }) => {
                // SearchState never submits while loading
                log::warn!(
                    "Dropping request {} received while request {} is pending",
                    id,
                    request_id
                );
            }
            Err(RecvTimeoutError::Timeout) => return DelayOutcome::Elapsed,
            Err(RecvTimeoutError::Disconnected) => return DelayOutcome::Disconnected,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
