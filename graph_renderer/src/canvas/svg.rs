//!
//! SVG canvas.
//!

use std::fmt::Write;

use crate::error::Error;
use crate::layout::Point;

use super::Canvas;
use super::Style;

///
/// SVG canvas.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgCanvas {
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
    /// The document body.
    body: String,
}

impl SvgCanvas {
    /// The font family of all text.
    const FONT_FAMILY: &'static str = "DejaVu Sans, Arial, sans-serif";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    ///
    /// Returns the complete SVG document.
    ///
    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\">\n{2}</svg>\n",
            self.width, self.height, self.body
        )
    }

    ///
    /// Renders the style attributes.
    ///
    fn attributes(style: Style) -> String {
        format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\"",
            style.fill.unwrap_or("none"),
            style.stroke.unwrap_or("none"),
            style.stroke_width,
        )
    }

    ///
    /// Escapes XML special characters.
    ///
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for character in text.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                character => escaped.push(character),
            }
        }
        escaped
    }
}

// Writing into a `String` cannot fail.
impl Canvas for SvgCanvas {
    fn background(&mut self, color: &str) {
        let _ = writeln!(
            self.body,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{color}\"/>",
            self.width, self.height
        );
    }

    fn line(&mut self, from: Point, to: Point, style: Style) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke-linecap=\"round\" {}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            Self::attributes(style)
        );
    }

    fn curve(&mut self, from: Point, control: Point, to: Point, style: Style) {
        let _ = writeln!(
            self.body,
            "<path d=\"M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}\" stroke-linecap=\"round\" {}/>",
            from.x,
            from.y,
            control.x,
            control.y,
            to.x,
            to.y,
            Self::attributes(style)
        );
    }

    fn circle(&mut self, center: Point, radius: f64, style: Style) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius,
            Self::attributes(style)
        );
    }

    fn rectangle(&mut self, corner: Point, width: f64, height: f64, style: Style) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" {}/>",
            corner.x,
            corner.y,
            width,
            height,
            Self::attributes(style)
        );
    }

    fn text(&mut self, anchor: Point, text: &str, size: f64, bold: bool, centered: bool) {
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{:.1}\" font-weight=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>",
            anchor.x,
            anchor.y,
            Self::FONT_FAMILY,
            size,
            if bold { "bold" } else { "normal" },
            if centered { "middle" } else { "start" },
            Self::escape(text)
        );
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        Ok(self.document().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::Canvas;
    use crate::canvas::Style;
    use crate::layout::Point;

    use super::SvgCanvas;

    #[test]
    fn document() {
        let mut canvas = SvgCanvas::new(80, 60);
        canvas.background("white");
        canvas.line(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Style::stroke("#FF5733", 4.0),
        );
        canvas.text(Point::new(10.0, 10.0), "Line <1>", 12.0, true, false);

        let document = String::from_utf8(canvas.finish().expect("Always valid")).expect("UTF-8");

        assert!(document.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"80\" height=\"60\""));
        assert!(document.contains(
            "<line x1=\"1.00\" y1=\"2.00\" x2=\"3.00\" y2=\"4.00\" stroke-linecap=\"round\" fill=\"none\" stroke=\"#FF5733\" stroke-width=\"4.00\"/>"
        ));
        assert!(document.contains(">Line &lt;1&gt;</text>"));
        assert!(document.trim_end().ends_with("</svg>"));
    }
}
