//!
//! The fixture benchmark executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::CommandFactory;
use clap::Parser;
use colored::Colorize;

use fixture_bench::DocumentBackend;

use self::arguments::Arguments;

/// The process exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => Arguments::validate(arguments),
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => Err(anyhow::anyhow!(error)),
    };
    let arguments = match arguments {
        Ok(arguments) => arguments,
        Err(error) => {
            println!("{}", Arguments::command().render_usage());
            eprintln!("{error}");
            std::process::exit(EXIT_CODE_FAILURE);
        }
    };

    let exit_code = match main_inner(arguments) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let complexity = fixture_bench::Complexity::new(
        arguments.parameters.as_slice(),
        arguments.dimensions.as_slice(),
        arguments.family,
    )?;
    let paths = fixture_bench::Fixture::discover(arguments.fixtures.as_path())?;

    let process = fixture_bench::SubprocessRunner::new(arguments.executable.clone());
    let runner = fixture_bench::Runner::new(process, arguments.runs);
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
        println!(
            "     {} {} fixture(s) in {:?}, complexity {}, timer granularity {:?}",
            "Found".bright_green().bold(),
            paths.len(),
            arguments.fixtures,
            complexity.describe(arguments.family),
            runner.granularity(),
        );
    }
    if paths.is_empty() {
        eprintln!(
            "{}: no `*.{}` fixtures found in {:?}",
            "Warning".bright_yellow().bold(),
            fixture_bench::Fixture::EXTENSION,
            arguments.fixtures,
        );
    }

    let run_time_start = Instant::now();
    let mut session = fixture_bench::Session::new(
        runner,
        arguments.family,
        complexity,
        arguments.executable.clone(),
        arguments.quiet,
    );
    let benchmark = session.run(paths)?;

    match arguments.output_format {
        fixture_bench::OutputFormat::Xlsx => {
            let settings = fixture_bench::ReportSettings {
                header_width: arguments.header_width,
                overflow: arguments.wrap_overflow,
                precision: fixture_bench::Precision {
                    time: arguments.time_precision,
                    uncertainty: arguments.uncertainty_precision,
                    ..fixture_bench::Precision::default()
                },
                precomputed: arguments.precomputed,
                chart: !arguments.no_chart,
                ..fixture_bench::ReportSettings::default()
            };
            let mut backend = fixture_bench::XlsxBackend::new();
            fixture_bench::Report::new(&benchmark, settings).write(&mut backend)?;
            backend.save(arguments.output_path.as_path())?;
        }
        fixture_bench::OutputFormat::Json => {
            fixture_bench::output::write_json(&benchmark, arguments.output_path.as_path())?;
        }
    }

    if !arguments.quiet {
        println!(
            "    {} {} fixture(s), {} skipped, in {}m{:02}s, report written to {:?}",
            "Finished".bright_green().bold(),
            benchmark.results.len(),
            benchmark.metadata.skipped.len(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
            arguments.output_path,
        );
    }

    Ok(())
}
