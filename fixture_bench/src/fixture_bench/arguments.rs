//!
//! The fixture benchmark arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The fixture benchmark arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Number of trials per fixture.
    #[arg(value_name = "NUMBER_OF_RUNS")]
    pub runs: usize,

    /// The complexity exponents `e1 e2`, optionally followed by the linear weight `w`.
    #[arg(
        value_name = "EXPONENT_ARGS",
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub parameters: Vec<f64>,

    /// Path to the executable under test.
    #[arg(long, default_value = "../src/main")]
    pub executable: PathBuf,

    /// The directory with `*.in` fixture files.
    #[arg(long, default_value = ".")]
    pub fixtures: PathBuf,

    /// The report output path.
    #[arg(short, long = "output-path", default_value = "report.xlsx")]
    pub output_path: PathBuf,

    /// The report format: `xlsx` or `json`.
    #[arg(long = "output-format", default_value_t = fixture_bench::OutputFormat::Xlsx)]
    pub output_format: fixture_bench::OutputFormat,

    /// The fixture family: `transit` or `edges`.
    #[arg(long, default_value_t = fixture_bench::Family::Transit)]
    pub family: fixture_bench::Family,

    /// The 1-based size dimensions bound to `e1`, `e2` and `w`, comma-separated.
    /// Defaults to the header order.
    #[arg(long, value_delimiter = ',')]
    pub dimensions: Vec<usize>,

    /// The header wrap width in characters.
    #[arg(long = "header-width", default_value_t = 30)]
    pub header_width: usize,

    /// What happens to headers that need more than two lines: `extend` or `truncate`.
    #[arg(long = "wrap-overflow", default_value_t = fixture_bench::WrapOverflow::Extend)]
    pub wrap_overflow: fixture_bench::WrapOverflow,

    /// Decimals of the trial and mean durations.
    #[arg(long = "time-precision", default_value_t = 2)]
    pub time_precision: u8,

    /// Decimals of the uncertainty.
    #[arg(long = "uncertainty-precision", default_value_t = 1)]
    pub uncertainty_precision: u8,

    /// Writes derived columns as values instead of formulas.
    #[arg(long)]
    pub precomputed: bool,

    /// Omits the complexity chart.
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validate the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.runs == 0 {
            anyhow::bail!("The number of runs must be at least 1.");
        }

        let minimum = fixture_bench::Complexity::FACTOR_COUNT;
        if !(minimum..=minimum + 1).contains(&arguments.parameters.len()) {
            anyhow::bail!(
                "Expected {} or {} exponent arguments, found {}.",
                minimum,
                minimum + 1,
                arguments.parameters.len()
            );
        }

        if !arguments.dimensions.is_empty()
            && arguments.dimensions.len() != arguments.parameters.len()
        {
            anyhow::bail!(
                "The argument `--dimensions` must bind exactly {} dimensions, found {}.",
                arguments.parameters.len(),
                arguments.dimensions.len()
            );
        }

        Ok(arguments)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Arguments;

    fn parse(arguments: &[&str]) -> anyhow::Result<Arguments> {
        let arguments = Arguments::try_parse_from(
            std::iter::once("fixture-bench").chain(arguments.iter().copied()),
        )?;
        Arguments::validate(arguments)
    }

    #[test]
    fn defaults() {
        let arguments = parse(&["3", "2", "1"]).expect("Always valid");

        assert_eq!(arguments.runs, 3);
        assert_eq!(arguments.parameters, vec![2.0, 1.0]);
        assert_eq!(arguments.executable.to_string_lossy(), "../src/main");
        assert_eq!(arguments.output_path.to_string_lossy(), "report.xlsx");
        assert_eq!(arguments.header_width, 30);
        assert!(!arguments.precomputed);
    }

    #[test]
    fn linear_weight_and_bindings() {
        let arguments =
            parse(&["5", "1", "-2", "0.5", "--dimensions", "1,3,2"]).expect("Always valid");

        assert_eq!(arguments.parameters, vec![1.0, -2.0, 0.5]);
        assert_eq!(arguments.dimensions, vec![1, 3, 2]);
    }

    #[test]
    fn wrong_arity() {
        assert!(parse(&["3", "2"]).is_err());
        assert!(parse(&["3", "2", "1", "1", "1"]).is_err());
        assert!(parse(&["3"]).is_err());
    }

    #[test]
    fn invalid_numbers() {
        assert!(parse(&["three", "2", "1"]).is_err());
        assert!(parse(&["3", "two", "1"]).is_err());
        assert!(parse(&["0", "2", "1"]).is_err());
    }

    #[test]
    fn binding_count_must_match() {
        assert!(parse(&["3", "2", "1", "--dimensions", "1,2,3"]).is_err());
    }
}
