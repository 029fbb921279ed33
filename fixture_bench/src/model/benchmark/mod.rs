//!
//! The benchmark representation.
//!

pub mod metadata;
pub mod result;
pub mod trial;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::metadata::Metadata;
use self::result::BenchmarkResult;

///
/// The benchmark representation.
///
/// Results are keyed by fixture identifier, so iteration follows the identifier order
/// regardless of the order in which fixtures were discovered or measured.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    /// Metadata related to the whole benchmark.
    pub metadata: Metadata,
    /// The per-fixture results.
    pub results: BTreeMap<String, BenchmarkResult>,
}

impl Benchmark {
    ///
    /// A shortcut constructor to set metadata.
    ///
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            results: BTreeMap::new(),
        }
    }

    ///
    /// Adds the result of a fixture, replacing a previous result with the same identifier.
    ///
    pub fn insert(&mut self, result: BenchmarkResult) {
        self.results.insert(result.fixture.clone(), result);
    }

    ///
    /// Iterates over the results in fixture identifier order.
    ///
    pub fn rows(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.values()
    }
}
