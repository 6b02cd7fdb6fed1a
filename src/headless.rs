//! Headless mode: generate one batch and return it without a terminal UI

use std::thread;

use crate::config::Config;
use crate::error::KeyscoutError;
use crate::research::{SearchBatch, generate_batch, source_from_seed};

/// Wait the configured delay and generate a batch for `query`
///
/// Unlike the UI, a blank query is an error here since the caller asked for
/// output explicitly.
pub fn run_headless(query: &str, config: &Config) -> Result<SearchBatch, KeyscoutError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(KeyscoutError::EmptyQuery);
    }

    thread::sleep(config.search.delay());

    let mut source = source_from_seed(config.search.seed);
    let results = generate_batch(trimmed, &mut *source);
    log::debug!("Headless batch of {} for {:?}", results.len(), trimmed);

    Ok(SearchBatch::new(trimmed, results))
}
