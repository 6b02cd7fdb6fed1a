//! Search lifecycle
//!
//! `SearchState` owns the idle/loading flag and the current batch. Accepted
//! submissions are handed to a worker thread that waits out the configured
//! delay, generates the batch and sends it back over a channel.

mod search_state;
mod worker;

pub use search_state::{SearchState, SubmitOutcome};
pub use worker::{SearchRequest, SearchResponse, spawn_worker};
