//! Random sources for search volume and competition draws
//!
//! Generation goes through the `RandomSource` trait so tests and `--seed`
//! can make batches reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::keyword::Competition;

pub const MIN_SEARCH_VOLUME: u32 = 1000;
pub const MAX_SEARCH_VOLUME: u32 = 10999;

/// Supplies the random parts of a keyword record
pub trait RandomSource {
    /// Uniform draw in `MIN_SEARCH_VOLUME..=MAX_SEARCH_VOLUME`
    fn search_volume(&mut self) -> u32;

    /// Uniform draw over the three competition levels
    fn competition(&mut self) -> Competition;
}

/// Owned random source that can move into the search worker thread
pub type BoxedSource = Box<dyn RandomSource + Send>;

/// `RandomSource` backed by any `rand` generator
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn search_volume(&mut self) -> u32 {
        self.rng.random_range(MIN_SEARCH_VOLUME..=MAX_SEARCH_VOLUME)
    }

    fn competition(&mut self) -> Competition {
        Competition::ALL[self.rng.random_range(0..Competition::ALL.len())]
    }
}

/// Seeded generator when a seed is given, OS-seeded otherwise
pub fn source_from_seed(seed: Option<u64>) -> BoxedSource {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::new(StdRng::from_os_rng())),
    }
}

/// Replays fixed volumes and levels in order, cycling when exhausted
#[cfg(test)]
pub struct ScriptedSource {
    volumes: Vec<u32>,
    levels: Vec<Competition>,
    volume_pos: usize,
    level_pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(volumes: Vec<u32>, levels: Vec<Competition>) -> Self {
        assert!(!volumes.is_empty() && !levels.is_empty());
        Self {
            volumes,
            levels,
            volume_pos: 0,
            level_pos: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn search_volume(&mut self) -> u32 {
        let v = self.volumes[self.volume_pos % self.volumes.len()];
        self.volume_pos += 1;
        v
    }

    fn competition(&mut self) -> Competition {
        let c = self.levels[self.level_pos % self.levels.len()];
        self.level_pos += 1;
        c
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
