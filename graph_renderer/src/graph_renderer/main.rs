//!
//! The graph renderer executable.
//!

pub(crate) mod arguments;

use clap::CommandFactory;
use clap::Parser;
use colored::Colorize;

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
        Ok(arguments) => arguments,
        Err(error) if !error.use_stderr() => error.exit(),
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
    let (drawing, path) = graph_renderer::render_fixture(
        arguments.directory.as_path(),
        arguments.fixture_name.as_str(),
        arguments.output_format,
    )
    .map_err(|error| {
        anyhow::anyhow!(
            "Rendering fixture `{}` in {:?}: {error}",
            arguments.fixture_name,
            arguments.directory
        )
    })?;

    if !arguments.quiet {
        println!(
            "    {} {} node(s) and {} edge(s) of {} line(s) to {:?}",
            "Rendered".bright_green().bold(),
            drawing.nodes.len(),
            drawing.edges.len(),
            drawing.legend.len(),
            path,
        );
    }

    Ok(())
}
