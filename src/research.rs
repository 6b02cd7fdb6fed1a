//! Keyword research batch synthesis
//!
//! Builds the mock keyword records shown in the results grid: a fixed set of
//! suffix templates appended to the query, with search volume and competition
//! drawn from an injectable random source.

mod generator;
mod keyword;
mod random;
mod volume_format;

pub use generator::{BATCH_SIZE, SUFFIX_TEMPLATES, generate_batch};
pub use keyword::{Competition, KeywordResult, SearchBatch};
pub use random::{
    BoxedSource, MAX_SEARCH_VOLUME, MIN_SEARCH_VOLUME, RandomSource, RngSource, source_from_seed,
};
pub use volume_format::format_thousands;

#[cfg(test)]
pub use random::ScriptedSource;
