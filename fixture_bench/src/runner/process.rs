//!
//! Launching the subject program.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use crate::model::benchmark::trial::Status;

use super::error::Error;

///
/// The result of a single invocation of the subject program.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Wall-clock time from process start to process exit.
    pub elapsed: Duration,
    /// How the program exited.
    pub status: Status,
}

///
/// Runs the subject program once against a fixture.
///
pub trait ProcessRunner {
    ///
    /// Runs the subject program with `fixture` as its standard input and waits for it to exit.
    ///
    fn run(&mut self, fixture: &Path) -> Result<Outcome, Error>;

    ///
    /// The smallest duration the runner can distinguish.
    ///
    fn granularity(&self) -> Duration {
        clock_granularity()
    }
}

///
/// Runs the subject program as an OS process.
///
/// Standard output and standard error are captured and thrown away. There is no timeout:
/// a subject program that never exits blocks the runner forever.
///
#[derive(Debug, Clone)]
pub struct SubprocessRunner {
    /// The executable path.
    pub executable: PathBuf,
}

impl SubprocessRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }
}

impl ProcessRunner for SubprocessRunner {
    fn run(&mut self, fixture: &Path) -> Result<Outcome, Error> {
        let stdin = std::fs::File::open(fixture).map_err(|error| Error::Stdin {
            error,
            path: fixture.to_path_buf(),
        })?;

        let mut command = std::process::Command::new(self.executable.as_path());
        command.stdin(stdin);
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        let start = Instant::now();
        let process = command.spawn().map_err(|error| Error::Launch {
            error,
            executable: self.executable.clone(),
        })?;
        let output = process.wait_with_output().map_err(|error| Error::Waiting {
            error,
            executable: self.executable.clone(),
        })?;
        let elapsed = start.elapsed();

        let status = if output.status.success() {
            Status::Success
        } else {
            Status::Failure {
                code: output.status.code(),
            }
        };
        Ok(Outcome { elapsed, status })
    }
}

///
/// Estimates the resolution of the monotonic clock.
///
pub fn clock_granularity() -> Duration {
    const SAMPLES: usize = 16;

    (0..SAMPLES)
        .map(|_| {
            let start = Instant::now();
            let mut now = Instant::now();
            while now == start {
                now = Instant::now();
            }
            now - start
        })
        .min()
        .unwrap_or_default()
}
