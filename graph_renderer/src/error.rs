//!
//! Graph rendering error.
//!

///
/// Graph rendering error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fixture cannot be loaded.
    #[error("{0}")]
    Fixture(#[from] fixture_bench::FixtureError),
    /// The generated SVG document cannot be parsed.
    #[error("SVG parsing: {0}")]
    Svg(#[from] resvg::usvg::Error),
    /// The raster surface cannot be allocated.
    #[error("Allocating a {width}x{height} raster surface")]
    Surface {
        /// The surface width in pixels.
        width: u32,
        /// The surface height in pixels.
        height: u32,
    },
    /// The raster image cannot be encoded.
    #[error("PNG encoding: {0}")]
    Encoding(String),
    /// The image cannot be written.
    #[error("{0}")]
    Output(#[from] fixture_bench::OutputError),
}
