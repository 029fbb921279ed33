//!
//! The measurements of a single fixture.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::statistics::Summary;

use super::trial::Trial;

///
/// The measurements of a single fixture.
///
/// Created once all trials of the fixture have completed and never modified afterwards.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// The fixture identifier.
    pub fixture: String,
    /// The fixture size dimensions.
    pub dimensions: Vec<u64>,
    /// The trials, in execution order.
    pub trials: Vec<Trial>,
    /// The complexity of the fixture.
    pub complexity: f64,
    /// The duration statistics.
    pub summary: Option<Summary>,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor, which computes the statistics eagerly.
    ///
    pub fn new(fixture: String, dimensions: Vec<u64>, trials: Vec<Trial>, complexity: f64) -> Self {
        let summary = Summary::new(Self::seconds(trials.as_slice()).as_slice());
        Self {
            fixture,
            dimensions,
            trials,
            complexity,
            summary,
        }
    }

    ///
    /// The trial durations in seconds.
    ///
    pub fn durations(&self) -> Vec<f64> {
        Self::seconds(self.trials.as_slice())
    }

    ///
    /// The trials whose subject program exited unsuccessfully.
    ///
    pub fn failed_trials(&self) -> impl Iterator<Item = &Trial> {
        self.trials.iter().filter(|trial| !trial.is_success())
    }

    fn seconds(trials: &[Trial]) -> Vec<f64> {
        trials.iter().map(|trial| trial.seconds).collect()
    }
}
