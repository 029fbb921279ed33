//!
//! Information associated with the benchmark run.
//!

use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::complexity::Complexity;
use crate::fixture::family::Family;

///
/// Information associated with the benchmark run.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Start of the benchmark run.
    pub start: DateTime<Utc>,
    /// End of the benchmark run.
    pub end: DateTime<Utc>,
    /// The executable under test.
    pub executable: PathBuf,
    /// Number of trials per fixture.
    pub trials: usize,
    /// The fixture family.
    pub family: Family,
    /// The complexity model.
    pub complexity: Complexity,
    /// Estimated resolution of the wall clock, in nanoseconds.
    pub granularity_ns: u64,
    /// Fixtures that could not be benchmarked.
    #[serde(default)]
    pub skipped: Vec<Skipped>,
}

///
/// A fixture that could not be benchmarked.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    /// The fixture path.
    pub path: PathBuf,
    /// The error message.
    pub reason: String,
}

impl Metadata {
    ///
    /// A shortcut constructor, which sets both timestamps to now.
    ///
    pub fn new(
        executable: PathBuf,
        trials: usize,
        family: Family,
        complexity: Complexity,
        granularity_ns: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            start: now,
            end: now,
            executable,
            trials,
            family,
            complexity,
            granularity_ns,
            skipped: vec![],
        }
    }
}
