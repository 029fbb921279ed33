//!
//! The graph renderer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The graph renderer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The fixture name, without the `.in` extension.
    #[arg(value_name = "FIXTURE_NAME")]
    pub fixture_name: String,

    /// The directory of the fixture and of the image.
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,

    /// The image format: `png` or `svg`.
    #[arg(long = "output-format", default_value_t = graph_renderer::ImageFormat::Png)]
    pub output_format: graph_renderer::ImageFormat,

    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Arguments;

    #[test]
    fn single_fixture_name() {
        let arguments =
            Arguments::try_parse_from(["graph-renderer", "test01"]).expect("Always valid");

        assert_eq!(arguments.fixture_name, "test01");
        assert_eq!(arguments.output_format, graph_renderer::ImageFormat::Png);
    }

    #[test]
    fn wrong_arity() {
        assert!(Arguments::try_parse_from(["graph-renderer"]).is_err());
        assert!(Arguments::try_parse_from(["graph-renderer", "a", "b"]).is_err());
    }
}
