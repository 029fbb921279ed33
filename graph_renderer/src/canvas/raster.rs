//!
//! PNG canvas.
//!

use crate::error::Error;
use crate::layout::Point;

use super::svg::SvgCanvas;
use super::Canvas;
use super::Style;

///
/// PNG canvas.
///
/// Collects the drawing as SVG and rasterizes it when finished.
///
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    /// The vector source.
    inner: SvgCanvas,
}

impl RasterCanvas {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: SvgCanvas::new(width, height),
        }
    }

    ///
    /// Rasterizes an SVG document into PNG bytes.
    ///
    pub fn rasterize(document: &str) -> Result<Vec<u8>, Error> {
        let mut options = resvg::usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = resvg::usvg::Tree::from_str(document, &options)?;
        let size = tree.size().to_int_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
            Error::Surface {
                width: size.width(),
                height: size.height(),
            },
        )?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );
        pixmap
            .encode_png()
            .map_err(|error| Error::Encoding(error.to_string()))
    }
}

impl Canvas for RasterCanvas {
    fn background(&mut self, color: &str) {
        self.inner.background(color);
    }

    fn line(&mut self, from: Point, to: Point, style: Style) {
        self.inner.line(from, to, style);
    }

    fn curve(&mut self, from: Point, control: Point, to: Point, style: Style) {
        self.inner.curve(from, control, to, style);
    }

    fn circle(&mut self, center: Point, radius: f64, style: Style) {
        self.inner.circle(center, radius, style);
    }

    fn rectangle(&mut self, corner: Point, width: f64, height: f64, style: Style) {
        self.inner.rectangle(corner, width, height, style);
    }

    fn text(&mut self, anchor: Point, text: &str, size: f64, bold: bool, centered: bool) {
        self.inner.text(anchor, text, size, bold, centered);
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        Self::rasterize(self.inner.document().as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::Canvas;
    use crate::canvas::Style;
    use crate::layout::Point;

    use super::RasterCanvas;

    #[test]
    fn png_signature() {
        let mut canvas = RasterCanvas::new(40, 30);
        canvas.background("white");
        canvas.circle(
            Point::new(20.0, 15.0),
            10.0,
            Style::outlined("white", "black", 1.5),
        );

        let image = canvas.finish().expect("Rasterizing");

        assert!(image.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn invalid_document() {
        assert!(RasterCanvas::rasterize("<not-svg").is_err());
    }
}
