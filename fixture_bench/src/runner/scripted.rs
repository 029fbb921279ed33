//!
//! A scripted process runner for tests.
//!

use std::collections::VecDeque;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use super::error::Error;
use super::process::Outcome;
use super::process::ProcessRunner;

///
/// Replays prepared outcomes instead of launching processes.
///
/// Once the script is exhausted, every further run succeeds instantly.
///
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    /// Outcomes returned by the next runs.
    pub script: VecDeque<Result<Outcome, Error>>,
    /// Fixtures the runner was called with, in call order.
    pub calls: Vec<PathBuf>,
}

impl ScriptedRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(script: Vec<Result<Outcome, Error>>) -> Self {
        Self {
            script: script.into(),
            calls: vec![],
        }
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&mut self, fixture: &Path) -> Result<Outcome, Error> {
        self.calls.push(fixture.to_path_buf());
        self.script.pop_front().unwrap_or(Ok(Outcome {
            elapsed: Duration::ZERO,
            status: crate::model::benchmark::trial::Status::Success,
        }))
    }

    fn granularity(&self) -> Duration {
        Duration::from_nanos(1)
    }
}
