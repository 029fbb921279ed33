//!
//! The drawing of a transit fixture.
//!

use fixture_bench::Fixture;

use crate::graph::MultiGraph;
use crate::layout::Point;
use crate::layout::StressLayout;
use crate::palette::Palette;

///
/// A node placed on the canvas.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDrawing {
    /// The node identifier.
    pub identifier: u64,
    /// The center in canvas coordinates.
    pub center: Point,
}

///
/// An edge placed on the canvas.
///
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDrawing {
    /// The index of the first endpoint in the node list.
    pub source: usize,
    /// The index of the second endpoint in the node list.
    pub target: usize,
    /// The line label.
    pub label: u64,
    /// The line color.
    pub color: &'static str,
    /// The index among the edges joining the same pair of nodes.
    pub instance: usize,
    /// The bend relative to the edge length. Zero is a straight segment.
    pub curvature: f64,
}

impl EdgeDrawing {
    ///
    /// Whether both endpoints are the same node.
    ///
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

///
/// A legend entry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// The entry text.
    pub text: String,
    /// The line color.
    pub color: &'static str,
}

///
/// The drawing of a transit fixture.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDrawing {
    /// The canvas width in pixels.
    pub width: u32,
    /// The canvas height in pixels.
    pub height: u32,
    /// The nodes, in ascending identifier order.
    pub nodes: Vec<NodeDrawing>,
    /// The edges, in record order.
    pub edges: Vec<EdgeDrawing>,
    /// The legend, in first-seen label order.
    pub legend: Vec<LegendEntry>,
}

impl GraphDrawing {
    /// The default canvas width in pixels.
    pub const WIDTH: u32 = 800;

    /// The default canvas height in pixels.
    pub const HEIGHT: u32 = 600;

    /// The node radius in pixels.
    pub const NODE_RADIUS: f64 = 18.0;

    /// The curvature added by every other parallel edge.
    pub const CURVATURE_STEP: f64 = 0.2;

    /// The free border around the graph in pixels.
    const MARGIN: f64 = 50.0;

    ///
    /// Lays out the fixture on a canvas of the given size.
    ///
    pub fn new(fixture: &Fixture, width: u32, height: u32) -> Self {
        let graph = MultiGraph::from_fixture(fixture);
        let palette = Palette::assign(graph.edges.iter().map(|edge| edge.label));
        let positions = StressLayout::default().layout(graph.hop_distances().as_slice());
        let positions = Self::fit(positions.as_slice(), width as f64, height as f64);

        let nodes = graph
            .nodes
            .iter()
            .zip(positions)
            .map(|(identifier, center)| NodeDrawing {
                identifier: *identifier,
                center,
            })
            .collect();
        let edges = graph
            .edges
            .iter()
            .map(|edge| EdgeDrawing {
                source: edge.source,
                target: edge.target,
                label: edge.label,
                color: palette.color(edge.label).unwrap_or(crate::palette::COLORS[0]),
                instance: edge.instance,
                curvature: Self::curvature(edge.instance),
            })
            .collect();
        let legend = palette
            .entries()
            .iter()
            .map(|(label, color)| LegendEntry {
                text: format!("Line {label}"),
                color: *color,
            })
            .collect();

        Self {
            width,
            height,
            nodes,
            edges,
            legend,
        }
    }

    ///
    /// Returns the curvature of the parallel edge with the given instance index.
    ///
    /// Instance 0 is straight, odd instances bend one way and even instances the other,
    /// each pair further out than the previous one.
    ///
    pub fn curvature(instance: usize) -> f64 {
        let level = instance.div_ceil(2) as f64;
        if instance % 2 == 1 {
            Self::CURVATURE_STEP * level
        } else {
            -Self::CURVATURE_STEP * level
        }
    }

    ///
    /// Scales and centers layout positions into the canvas, preserving the aspect ratio.
    ///
    fn fit(positions: &[Point], width: f64, height: f64) -> Vec<Point> {
        let center = Point::new(width / 2.0, height / 2.0);
        let (minimum, maximum) = positions.iter().fold(
            (
                Point::new(f64::INFINITY, f64::INFINITY),
                Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(minimum, maximum), position| {
                (
                    Point::new(minimum.x.min(position.x), minimum.y.min(position.y)),
                    Point::new(maximum.x.max(position.x), maximum.y.max(position.y)),
                )
            },
        );
        let extent = (maximum.x - minimum.x).max(maximum.y - minimum.y);
        if positions.is_empty() || extent <= 0.0 {
            return vec![center; positions.len()];
        }

        let scale = ((width - 2.0 * Self::MARGIN).min(height - 2.0 * Self::MARGIN) / extent).max(0.0);
        let middle = Point::new((minimum.x + maximum.x) / 2.0, (minimum.y + maximum.y) / 2.0);
        positions
            .iter()
            .map(|position| {
                Point::new(
                    center.x + (position.x - middle.x) * scale,
                    center.y + (position.y - middle.y) * scale,
                )
            })
            .collect()
    }
}
