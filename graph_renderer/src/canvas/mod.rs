//!
//! The drawing surface.
//!

pub mod raster;
pub mod svg;

use crate::error::Error;
use crate::layout::Point;

///
/// Stroke and fill of a shape.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style<'a> {
    /// The fill color, if filled.
    pub fill: Option<&'a str>,
    /// The stroke color, if stroked.
    pub stroke: Option<&'a str>,
    /// The stroke width in pixels.
    pub stroke_width: f64,
}

impl<'a> Style<'a> {
    ///
    /// A stroke without fill.
    ///
    pub fn stroke(color: &'a str, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }

    ///
    /// A fill with an outline.
    ///
    pub fn outlined(fill: &'a str, stroke: &'a str, width: f64) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width: width,
        }
    }
}

///
/// The drawing surface.
///
/// Owned by the caller for the whole rendering and consumed by `finish`, which produces
/// the encoded image.
///
pub trait Canvas {
    ///
    /// Fills the whole surface.
    ///
    fn background(&mut self, color: &str);

    ///
    /// Draws a straight segment.
    ///
    fn line(&mut self, from: Point, to: Point, style: Style);

    ///
    /// Draws a quadratic curve bent towards `control`.
    ///
    fn curve(&mut self, from: Point, control: Point, to: Point, style: Style);

    ///
    /// Draws a circle.
    ///
    fn circle(&mut self, center: Point, radius: f64, style: Style);

    ///
    /// Draws a rectangle from its top-left corner.
    ///
    fn rectangle(&mut self, corner: Point, width: f64, height: f64, style: Style);

    ///
    /// Draws text. `anchor` is the middle of the text if `centered`, the start otherwise.
    ///
    fn text(&mut self, anchor: Point, text: &str, size: f64, bold: bool, centered: bool);

    ///
    /// Encodes the image.
    ///
    fn finish(self) -> Result<Vec<u8>, Error>;
}
