//!
//! The transit fixture graph renderer library.
//!

pub mod canvas;
pub mod drawing;
pub mod error;
pub mod format;
pub mod graph;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use crate::canvas::raster::RasterCanvas;
pub use crate::canvas::svg::SvgCanvas;
pub use crate::canvas::Canvas;
pub use crate::drawing::GraphDrawing;
pub use crate::error::Error;
pub use crate::format::ImageFormat;
pub use crate::graph::MultiGraph;
pub use crate::layout::Point;
pub use crate::layout::StressLayout;
pub use crate::palette::Palette;
pub use crate::renderer::render;

use std::path::Path;
use std::path::PathBuf;

///
/// Renders the fixture `<directory>/<name>.in` into `<directory>/<name>.<format>`.
///
/// Returns the drawing and the image path.
///
pub fn render_fixture(
    directory: &Path,
    name: &str,
    format: ImageFormat,
) -> Result<(GraphDrawing, PathBuf), Error> {
    let input = directory.join(format!("{name}.{}", fixture_bench::Fixture::EXTENSION));
    let output = directory.join(format!("{name}.{}", format.extension()));

    let fixture =
        fixture_bench::Fixture::try_from((input.as_path(), fixture_bench::Family::Transit))?;
    let drawing = GraphDrawing::new(&fixture, GraphDrawing::WIDTH, GraphDrawing::HEIGHT);
    let image = match format {
        ImageFormat::Png => {
            render(&drawing, RasterCanvas::new(drawing.width, drawing.height)).finish()?
        }
        ImageFormat::Svg => {
            render(&drawing, SvgCanvas::new(drawing.width, drawing.height)).finish()?
        }
    };
    fixture_bench::output::write_atomically(output.as_path(), image.as_slice())?;

    Ok((drawing, output))
}
