//!
//! The benchmark session.
//!

use std::path::Path;
use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;

use crate::complexity::Complexity;
use crate::fixture::error::Error as FixtureError;
use crate::fixture::family::Family;
use crate::fixture::Fixture;
use crate::model::benchmark::metadata::Metadata;
use crate::model::benchmark::metadata::Skipped;
use crate::model::benchmark::result::BenchmarkResult;
use crate::model::benchmark::Benchmark;
use crate::runner::error::Error as RunnerError;
use crate::runner::process::ProcessRunner;
use crate::runner::Runner;

///
/// The benchmark session.
///
/// Processes fixtures one at a time. A fixture that cannot be loaded is skipped with a
/// warning, while an executable that cannot be launched aborts the whole session.
///
pub struct Session<P: ProcessRunner> {
    /// The benchmark runner.
    runner: Runner<P>,
    /// The fixture family.
    family: Family,
    /// The complexity model.
    complexity: Complexity,
    /// The executable path, recorded in the metadata.
    executable: PathBuf,
    /// Whether the terminal output is suppressed.
    quiet: bool,
}

impl<P: ProcessRunner> Session<P> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        runner: Runner<P>,
        family: Family,
        complexity: Complexity,
        executable: PathBuf,
        quiet: bool,
    ) -> Self {
        Self {
            runner,
            family,
            complexity,
            executable,
            quiet,
        }
    }

    ///
    /// Benchmarks every fixture in `paths`.
    ///
    pub fn run(&mut self, paths: Vec<PathBuf>) -> Result<Benchmark, RunnerError> {
        let metadata = Metadata::new(
            self.executable.clone(),
            self.runner.trials(),
            self.family,
            self.complexity.clone(),
            self.runner.granularity().as_nanos() as u64,
        );
        let mut benchmark = Benchmark::new(metadata);

        for path in paths.into_iter() {
            match self.run_fixture(path.as_path()) {
                Ok(result) => {
                    self.report_failed_trials(&result);
                    benchmark.insert(result);
                }
                Err(SessionError::Fixture(error)) => {
                    self.warn(error.to_string());
                    benchmark.metadata.skipped.push(Skipped {
                        path,
                        reason: error.to_string(),
                    });
                }
                Err(SessionError::Runner(error)) if !error.is_fatal() => {
                    self.warn(error.to_string());
                    benchmark.metadata.skipped.push(Skipped {
                        path,
                        reason: error.to_string(),
                    });
                }
                Err(SessionError::Runner(error)) => return Err(error),
            }
        }

        benchmark.metadata.end = Utc::now();
        Ok(benchmark)
    }

    ///
    /// Returns the benchmark runner.
    ///
    pub fn into_runner(self) -> Runner<P> {
        self.runner
    }

    ///
    /// Loads and benchmarks a single fixture.
    ///
    fn run_fixture(&mut self, path: &Path) -> Result<BenchmarkResult, SessionError> {
        let fixture = Fixture::try_from((path, self.family)).map_err(SessionError::Fixture)?;
        if !self.quiet {
            println!(
                "     {} {} ({} trials)",
                "Running".bright_green().bold(),
                fixture.identifier,
                self.runner.trials(),
            );
        }

        let trials = self.runner.run(path).map_err(SessionError::Runner)?;
        let complexity = self.complexity.evaluate(fixture.dimensions.as_slice());
        let result = BenchmarkResult::new(fixture.identifier, fixture.dimensions, trials, complexity);
        if result
            .summary
            .map(|summary| summary.standard_deviation.is_none())
            .unwrap_or_default()
        {
            self.warn(format!(
                "{}: a single trial leaves the uncertainty undefined",
                result.fixture
            ));
        }
        Ok(result)
    }

    ///
    /// Prints a warning for every trial whose subject program failed.
    ///
    fn report_failed_trials(&self, result: &BenchmarkResult) {
        for trial in result.failed_trials() {
            self.warn(format!(
                "{}: trial {} finished with {}",
                result.fixture,
                trial.index + 1,
                trial.status
            ));
        }
    }

    ///
    /// Prints a warning unless the output is suppressed.
    ///
    fn warn(&self, message: String) {
        if !self.quiet {
            eprintln!("{}: {message}", "Warning".bright_yellow().bold());
        }
    }
}

///
/// A failure while processing a single fixture.
///
enum SessionError {
    /// The fixture cannot be loaded.
    Fixture(FixtureError),
    /// The fixture cannot be run.
    Runner(RunnerError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::complexity::Complexity;
    use crate::fixture::family::Family;
    use crate::model::benchmark::trial::Status;
    use crate::runner::error::Error as RunnerError;
    use crate::runner::process::Outcome;
    use crate::runner::scripted::ScriptedRunner;
    use crate::runner::Runner;

    use super::Session;

    fn write(directory: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = directory.path().join(name);
        let mut file = std::fs::File::create(path.as_path()).expect("Fixture creation");
        file.write_all(content.as_bytes()).expect("Fixture writing");
        path
    }

    fn session(script: Vec<Result<Outcome, RunnerError>>, trials: usize) -> Session<ScriptedRunner> {
        let complexity = Complexity::new(&[2.0, 1.0], &[], Family::Transit).expect("Always valid");
        Session::new(
            Runner::new(ScriptedRunner::new(script), trials),
            Family::Transit,
            complexity,
            PathBuf::from("main"),
            true,
        )
    }

    fn success(milliseconds: u64) -> Result<Outcome, RunnerError> {
        Ok(Outcome {
            elapsed: Duration::from_millis(milliseconds),
            status: Status::Success,
        })
    }

    #[test]
    fn three_trials_per_fixture() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = write(&directory, "small.in", "3 2 1\n1 2 1\n2 3 1\n");
        let mut session = session(vec![success(1), success(2), success(3)], 3);

        let benchmark = session.run(vec![path]).expect("Always valid");

        let result = benchmark.results.get("small.in").expect("Always exists");
        assert_eq!(result.durations().len(), 3);
        assert!(result.durations().iter().all(|seconds| *seconds >= 0.0));
        assert_eq!(result.dimensions, vec![3, 2, 1]);
        assert_eq!(result.complexity, 18.0);
        let summary = result.summary.expect("Not empty");
        assert!((summary.mean - 0.002).abs() < 1e-12);
    }

    #[test]
    fn malformed_fixture_is_skipped() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let broken = write(&directory, "broken.in", "3 x 1\n");
        let good = write(&directory, "good.in", "2 1 1\n1 2 1\n");
        let mut session = session(vec![], 2);

        let benchmark = session.run(vec![broken.clone(), good]).expect("Always valid");

        assert_eq!(benchmark.results.len(), 1);
        assert!(benchmark.results.contains_key("good.in"));
        assert_eq!(benchmark.metadata.skipped.len(), 1);
        assert_eq!(benchmark.metadata.skipped[0].path, broken);
        assert_eq!(session.into_runner().into_inner().calls.len(), 2);
    }

    #[test]
    fn launch_failure_aborts_the_batch() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let first = write(&directory, "a.in", "2 1 1\n1 2 1\n");
        let second = write(&directory, "b.in", "2 1 1\n1 2 1\n");
        let script = vec![Err(RunnerError::Launch {
            error: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            executable: PathBuf::from("main"),
        })];
        let mut session = session(script, 2);

        let result = session.run(vec![first, second]);

        assert!(matches!(result, Err(RunnerError::Launch { .. })));
        assert_eq!(session.into_runner().into_inner().calls.len(), 1);
    }

    #[test]
    fn failed_trials_do_not_stop_the_batch() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let first = write(&directory, "a.in", "2 1 1\n1 2 1\n");
        let second = write(&directory, "b.in", "2 1 1\n1 2 1\n");
        let script = vec![
            Ok(Outcome {
                elapsed: Duration::from_millis(5),
                status: Status::Failure { code: Some(139) },
            }),
            success(5),
        ];
        let mut session = session(script, 2);

        let benchmark = session.run(vec![second, first]).expect("Always valid");

        assert_eq!(benchmark.results.len(), 2);
        let failed = benchmark
            .rows()
            .map(|result| result.failed_trials().count())
            .sum::<usize>();
        assert_eq!(failed, 1);
    }
}
