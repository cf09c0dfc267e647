//! Line segment type.

use super::Point;
use num_traits::Float;

/// A line segment between two points.
///
/// The pair is directionless for display purposes, but the `p1`/`p2` order
/// fixes the parametrization the clippers use (`P(u) = p1 + u·(p2 − p1)`).
#[derive(Debug, Clone)]
pub struct Line<F> {
    /// First endpoint.
    pub p1: Point<F>,
    /// Second endpoint.
    pub p2: Point<F>,
    /// Whether any portion of the segment is visible.
    pub visible: bool,
    /// Display color, passed through to the clipped result.
    pub color: String,
}

impl<F: Float> Line<F> {
    /// Creates a new visible line with the default color.
    #[inline]
    pub fn new(p1: Point<F>, p2: Point<F>) -> Self {
        Self {
            p1,
            p2,
            visible: true,
            color: String::from("black"),
        }
    }

    /// Creates a line from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Normalizes both endpoints with the given transform.
    pub fn normalize(&mut self, matrix: &[[F; 3]; 3]) {
        self.p1.normalize(matrix);
        self.p2.normalize(matrix);
    }
}

impl<F: Float> PartialEq for Line<F> {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1
            && self.p2 == other.p2
            && self.visible == other.visible
            && self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let line: Line<f64> = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!(line.visible);
        assert_eq!(line.color, "black");
        assert_eq!(line.p1, Point::new(0.0, 0.0));
        assert_eq!(line.p2, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_normalize_both_endpoints() {
        let m = [[1.0, 0.0, -1.0], [0.0, 1.0, -1.0], [0.0, 0.0, 1.0]];
        let mut line: Line<f64> = Line::from_coords(1.0, 1.0, 2.0, 2.0);
        line.normalize(&m);
        assert_relative_eq!(line.p1.x_norm, 0.0);
        assert_relative_eq!(line.p1.y_norm, 0.0);
        assert_relative_eq!(line.p2.x_norm, 1.0);
        assert_relative_eq!(line.p2.y_norm, 1.0);
    }
}
