use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use super::worker::{SearchRequest, SearchResponse, spawn_worker};
use crate::research::{BoxedSource, KeywordResult};

/// What `SearchState::submit` did with a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request sent to the worker; loading until its batch arrives
    Started { request_id: u64 },
    /// Query was empty after trimming; nothing changed
    EmptyQuery,
    /// A search is already loading; nothing changed
    AlreadyLoading,
    /// Worker thread is gone; loading was not entered
    WorkerUnavailable,
}

/// Search lifecycle state: idle or loading, plus the current batch
pub struct SearchState {
    loading: bool,
    results: Vec<KeywordResult>,
    /// Trimmed query that produced `results`
    results_query: Option<String>,
    request_id: u64,
    in_flight_request_id: Option<u64>,
    in_flight_query: Option<String>,
    request_tx: Option<Sender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl SearchState {
    /// Create a SearchState with its own worker thread
    pub fn new(delay: Duration, source: BoxedSource) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(delay, source, request_rx, response_tx);
        Self::with_channels(request_tx, response_rx)
    }

    /// Create a SearchState wired to existing channels
    pub fn with_channels(
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        Self {
            loading: false,
            results: Vec::new(),
            results_query: None,
            request_id: 0,
            in_flight_request_id: None,
            in_flight_query: None,
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[KeywordResult] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn results_query(&self) -> Option<&str> {
        self.results_query.as_deref()
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.in_flight_request_id
    }

    /// Submit a query
    ///
    /// Blank queries and submissions while loading are ignored. Otherwise the
    /// state enters loading immediately and the trimmed query is sent to the
    /// worker.
    pub fn submit(&mut self, query: &str) -> SubmitOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::EmptyQuery;
        }
        if self.loading {
            log::debug!("Ignoring submit while request {:?} loads", self.in_flight_request_id);
            return SubmitOutcome::AlreadyLoading;
        }

        let Some(tx) = &self.request_tx else {
            return SubmitOutcome::WorkerUnavailable;
        };

        let request_id = self.request_id.wrapping_add(1);
        let request = SearchRequest::Generate {
            query: trimmed.to_string(),
            request_id,
        };
        if tx.send(request).is_err() {
            log::warn!("Search worker unavailable; dropping request {}", request_id);
            self.request_tx = None;
            return SubmitOutcome::WorkerUnavailable;
        }

        self.request_id = request_id;
        self.in_flight_request_id = Some(request_id);
        self.in_flight_query = Some(trimmed.to_string());
        self.loading = true;
        log::debug!("Submitted request {} for {:?}", request_id, trimmed);

        SubmitOutcome::Started { request_id }
    }

    /// Drain worker responses
    ///
    /// Returns true when the visible state changed. A completed batch for the
    /// in-flight request replaces the results and leaves loading in the same
    /// call; responses for any other request id are discarded.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(rx) = &self.response_rx else {
                return changed;
            };

            match rx.try_recv() {
                Ok(SearchResponse::Completed {
                    request_id,
                    results,
                }) => {
                    if self.in_flight_request_id == Some(request_id) {
                        self.results = results;
                        self.results_query = self.in_flight_query.take();
                        self.in_flight_request_id = None;
                        self.loading = false;
                        changed = true;
                    } else {
                        log::debug!("Discarding stale results for request {}", request_id);
                    }
                }
                Ok(SearchResponse::Cancelled { request_id }) => {
                    log::debug!("Request {} cancelled", request_id);
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Search worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    if self.loading {
                        self.loading = false;
                        self.in_flight_request_id = None;
                        self.in_flight_query = None;
                        changed = true;
                    }
                    return changed;
                }
            }
        }
    }

    /// Cancel the in-flight request, if any, and return to idle
    ///
    /// Existing results are kept.
    pub fn cancel(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take() {
            if let Some(tx) = &self.request_tx {
                let _ = tx.send(SearchRequest::Cancel { request_id });
                log::debug!("Sent cancel for request {}", request_id);
            }
        }
        self.in_flight_query = None;
        self.loading = false;
    }
}

impl Drop for SearchState {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
