//!
//! Drawing of a graph onto a canvas.
//!

use crate::canvas::Canvas;
use crate::canvas::Style;
use crate::drawing::EdgeDrawing;
use crate::drawing::GraphDrawing;
use crate::layout::Point;

/// The edge stroke width in pixels.
pub const EDGE_WIDTH: f64 = 4.0;

/// The node outline width in pixels.
pub const NODE_OUTLINE_WIDTH: f64 = 1.5;

/// The node label font size.
pub const NODE_FONT_SIZE: f64 = 12.0;

/// The legend font size.
pub const LEGEND_FONT_SIZE: f64 = 10.0;

/// The legend entry height in pixels.
const LEGEND_ROW_HEIGHT: f64 = 20.0;

/// The legend box width in pixels.
const LEGEND_WIDTH: f64 = 110.0;

/// The legend box padding in pixels.
const LEGEND_PADDING: f64 = 8.0;

///
/// Draws `drawing` onto `canvas` and gives the canvas back.
///
/// Edges are drawn first so that nodes cover their ends, the legend goes last.
///
pub fn render<C: Canvas>(drawing: &GraphDrawing, mut canvas: C) -> C {
    canvas.background("white");

    for edge in drawing.edges.iter() {
        draw_edge(drawing, edge, &mut canvas);
    }

    for node in drawing.nodes.iter() {
        canvas.circle(
            node.center,
            GraphDrawing::NODE_RADIUS,
            Style::outlined("white", "black", NODE_OUTLINE_WIDTH),
        );
        canvas.text(
            node.center,
            node.identifier.to_string().as_str(),
            NODE_FONT_SIZE,
            true,
            true,
        );
    }

    if !drawing.legend.is_empty() {
        let corner = Point::new(
            drawing.width as f64 - LEGEND_WIDTH - LEGEND_PADDING,
            LEGEND_PADDING,
        );
        let height = LEGEND_ROW_HEIGHT * drawing.legend.len() as f64 + LEGEND_PADDING;
        canvas.rectangle(
            corner,
            LEGEND_WIDTH,
            height,
            Style::outlined("white", "#CCCCCC", 1.0),
        );
        for (index, entry) in drawing.legend.iter().enumerate() {
            let y = corner.y + LEGEND_PADDING / 2.0 + LEGEND_ROW_HEIGHT * (index as f64 + 0.5);
            canvas.line(
                Point::new(corner.x + LEGEND_PADDING, y),
                Point::new(corner.x + LEGEND_PADDING + 28.0, y),
                Style::stroke(entry.color, EDGE_WIDTH),
            );
            canvas.text(
                Point::new(corner.x + LEGEND_PADDING + 36.0, y),
                entry.text.as_str(),
                LEGEND_FONT_SIZE,
                false,
                false,
            );
        }
    }

    canvas
}

///
/// Draws a single edge as a segment, a curve or a loop.
///
fn draw_edge<C: Canvas>(drawing: &GraphDrawing, edge: &EdgeDrawing, canvas: &mut C) {
    let style = Style::stroke(edge.color, EDGE_WIDTH);
    let from = drawing.nodes[edge.source].center;
    let to = drawing.nodes[edge.target].center;

    if edge.is_loop() {
        let radius = GraphDrawing::NODE_RADIUS * 0.6 + 6.0 * edge.instance as f64;
        let center = Point::new(from.x, from.y - GraphDrawing::NODE_RADIUS - radius + 4.0);
        canvas.circle(center, radius, style);
        return;
    }

    if edge.curvature == 0.0 {
        canvas.line(from, to, style);
        return;
    }

    // The bend side is taken from the pair ordered by node index, not from the record.
    let (first, second) = if edge.source <= edge.target {
        (from, to)
    } else {
        (to, from)
    };
    let control = Point::new(
        (from.x + to.x) / 2.0 + edge.curvature * (second.y - first.y),
        (from.y + to.y) / 2.0 - edge.curvature * (second.x - first.x),
    );
    canvas.curve(from, control, to, style);
}
