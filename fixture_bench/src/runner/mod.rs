//!
//! The benchmark runner.
//!

pub mod error;
pub mod process;
#[cfg(test)]
pub mod scripted;

use std::path::Path;
use std::time::Duration;

use crate::model::benchmark::trial::Trial;

use self::error::Error;
use self::process::ProcessRunner;

///
/// The benchmark runner.
///
/// Trials run strictly one after another: the next process is only launched once the
/// previous one has exited, so trials never compete for the machine.
///
#[derive(Debug)]
pub struct Runner<P: ProcessRunner> {
    /// The process runner.
    process: P,
    /// Number of trials per fixture.
    trials: usize,
}

impl<P: ProcessRunner> Runner<P> {
    ///
    /// A shortcut constructor.
    ///
    /// # Panics
    /// If `trials` is zero. The argument parser rejects it before.
    ///
    pub fn new(process: P, trials: usize) -> Self {
        assert!(trials > 0, "At least one trial is required");
        Self { process, trials }
    }

    ///
    /// Runs all trials of a single fixture.
    ///
    /// Trials whose subject program exits unsuccessfully are recorded with their
    /// duration and a failure status.
    ///
    pub fn run(&mut self, fixture: &Path) -> Result<Vec<Trial>, Error> {
        let mut trials = Vec::with_capacity(self.trials);
        for index in 0..self.trials {
            let outcome = self.process.run(fixture)?;
            trials.push(Trial {
                index,
                seconds: outcome.elapsed.as_secs_f64(),
                status: outcome.status,
            });
        }
        Ok(trials)
    }

    ///
    /// Number of trials per fixture.
    ///
    pub fn trials(&self) -> usize {
        self.trials
    }

    ///
    /// The smallest duration the runner can distinguish.
    ///
    pub fn granularity(&self) -> Duration {
        self.process.granularity()
    }

    ///
    /// Returns the process runner.
    ///
    pub fn into_inner(self) -> P {
        self.process
    }
}
