//!
//! Stress majorization layout.
//!

///
/// A point in the plane.
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    ///
    /// Returns the Euclidean distance to `other`.
    ///
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

///
/// Stress majorization layout settings.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressLayout {
    /// The maximum number of sweeps over all nodes.
    pub iterations: usize,
    /// The relative stress decrease below which the layout is considered converged.
    pub tolerance: f64,
}

impl Default for StressLayout {
    fn default() -> Self {
        Self {
            iterations: 500,
            tolerance: 1e-5,
        }
    }
}

impl StressLayout {
    /// Distances shorter than this count as coincident nodes.
    const EPSILON: f64 = 1e-9;

    ///
    /// Computes node positions from all-pairs hop distances.
    ///
    /// Nodes start on a circle in index order and are moved one at a time to the minimum
    /// of their stress majorant, weighting every pair by the inverse square of its target
    /// distance. Unreachable pairs target one hop more than the longest finite distance.
    /// The result is fully determined by the input.
    ///
    pub fn layout(&self, distances: &[Vec<Option<usize>>]) -> Vec<Point> {
        let count = distances.len();
        if count < 2 {
            return vec![Point::default(); count];
        }

        let targets = Self::targets(distances);
        let radius = targets
            .iter()
            .flatten()
            .copied()
            .fold(1.0, f64::max)
            / 2.0;
        let mut positions = (0..count)
            .map(|index| {
                let angle = std::f64::consts::TAU * (index as f64) / (count as f64);
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect::<Vec<Point>>();

        let mut stress = Self::stress(positions.as_slice(), targets.as_slice());
        for _ in 0..self.iterations {
            for node in 0..count {
                positions[node] = Self::relocate(node, positions.as_slice(), targets.as_slice());
            }

            let updated = Self::stress(positions.as_slice(), targets.as_slice());
            let converged = stress <= Self::EPSILON || (stress - updated) / stress < self.tolerance;
            stress = updated;
            if converged {
                break;
            }
        }
        positions
    }

    ///
    /// Returns the weighted stress of `positions` against the target distances.
    ///
    pub fn stress(positions: &[Point], targets: &[Vec<f64>]) -> f64 {
        let mut stress = 0.0;
        for first in 0..positions.len() {
            for second in (first + 1)..positions.len() {
                let target = targets[first][second];
                let difference = positions[first].distance(&positions[second]) - target;
                stress += difference * difference / (target * target);
            }
        }
        stress
    }

    ///
    /// Returns the target distances with unreachable pairs resolved.
    ///
    pub fn targets(distances: &[Vec<Option<usize>>]) -> Vec<Vec<f64>> {
        let unreachable = distances
            .iter()
            .flatten()
            .flatten()
            .copied()
            .max()
            .unwrap_or_default()
            + 1;
        distances
            .iter()
            .map(|row| {
                row.iter()
                    .map(|distance| distance.unwrap_or(unreachable) as f64)
                    .collect()
            })
            .collect()
    }

    ///
    /// Returns the stress-minimizing position of `node` with all other nodes fixed.
    ///
    fn relocate(node: usize, positions: &[Point], targets: &[Vec<f64>]) -> Point {
        let current = positions[node];
        let mut sum = Point::default();
        let mut weights = 0.0;
        for (other, position) in positions.iter().enumerate() {
            if other == node {
                continue;
            }

            let target = targets[node][other];
            let weight = 1.0 / (target * target);
            let distance = current.distance(position);
            let (x, y) = if distance > Self::EPSILON {
                (
                    position.x + target * (current.x - position.x) / distance,
                    position.y + target * (current.y - position.y) / distance,
                )
            } else {
                (position.x, position.y)
            };
            sum.x += weight * x;
            sum.y += weight * y;
            weights += weight;
        }
        Point::new(sum.x / weights, sum.y / weights)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use super::StressLayout;

    fn path(count: usize) -> Vec<Vec<Option<usize>>> {
        (0..count)
            .map(|first| {
                (0..count)
                    .map(|second| Some(first.abs_diff(second)))
                    .collect()
            })
            .collect()
    }

    fn circle(count: usize, radius: f64) -> Vec<Point> {
        (0..count)
            .map(|index| {
                let angle = std::f64::consts::TAU * (index as f64) / (count as f64);
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    #[test]
    fn deterministic() {
        let distances = path(6);
        let layout = StressLayout::default();

        assert_eq!(layout.layout(&distances), layout.layout(&distances));
    }

    #[test]
    fn stress_decreases() {
        let distances = vec![
            vec![Some(0), Some(1), Some(1), None],
            vec![Some(1), Some(0), Some(2), None],
            vec![Some(1), Some(2), Some(0), None],
            vec![None, None, None, Some(0)],
        ];
        let targets = StressLayout::targets(&distances);

        let initial = StressLayout::stress(circle(4, 1.5).as_slice(), targets.as_slice());
        let positions = StressLayout::default().layout(&distances);
        let last = StressLayout::stress(positions.as_slice(), targets.as_slice());

        assert!(last < initial, "{last} >= {initial}");
        assert_eq!(targets[0][3], 3.0);
    }

    #[test]
    fn path_is_straightened() {
        let positions = StressLayout::default().layout(&path(3));

        let ends = positions[0].distance(&positions[2]);
        let left = positions[0].distance(&positions[1]);
        let right = positions[1].distance(&positions[2]);
        assert!((ends - 2.0).abs() < 0.05, "{ends}");
        assert!((left - 1.0).abs() < 0.05, "{left}");
        assert!((right - 1.0).abs() < 0.05, "{right}");
    }

    #[test]
    fn trivial_graphs() {
        let layout = StressLayout::default();

        assert!(layout.layout(&[]).is_empty());
        assert_eq!(layout.layout(&[vec![Some(0)]]), vec![Point::default()]);
    }
}
