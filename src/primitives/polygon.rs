//! Polygon type and the ordering helpers the polygon clipper relies on.

use super::Point;
use num_traits::Float;
use std::cmp::Ordering;

/// A polygon as an ordered, implicitly-closed vertex loop.
///
/// Insertion order is boundary order; there is no closing duplicate — the
/// edge from the last point back to the first is implicit. The clipping
/// traversal composes windings correctly when the boundary runs clockwise.
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    /// The boundary points in order.
    pub points: Vec<Point<F>>,
    /// Whether any portion of the polygon is visible.
    pub visible: bool,
    /// Display color, passed through to the clipped result.
    pub color: String,
}

impl<F: Float> Polygon<F> {
    /// Creates a new visible polygon with the default color.
    #[inline]
    pub fn new(points: Vec<Point<F>>) -> Self {
        Self {
            points,
            visible: true,
            color: String::from("black"),
        }
    }

    /// Creates a polygon with no points.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns true if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of boundary points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Normalizes every point with the given transform.
    pub fn normalize(&mut self, matrix: &[[F; 3]; 3]) {
        for point in &mut self.points {
            point.normalize(matrix);
        }
    }

    /// Returns the arithmetic mean of the normalized coordinates, or `None`
    /// for an empty polygon.
    ///
    /// This is the pivot for [`sort_clockwise`](Polygon::sort_clockwise), not
    /// an area-weighted centroid.
    pub fn centroid(&self) -> Option<Point<F>> {
        if self.points.is_empty() {
            return None;
        }

        let n = F::from(self.points.len()).unwrap();
        let mut cx = F::zero();
        let mut cy = F::zero();
        for point in &self.points {
            cx = cx + point.x_norm;
            cy = cy + point.y_norm;
        }

        Some(Point::new(cx / n, cy / n))
    }

    /// Sorts the points clockwise around `center` (descending polar angle).
    ///
    /// The sort is stable: points at the exact same angle keep their insertion
    /// order, which the polygon clipper uses to keep window corners ahead of
    /// coincident intersection points.
    pub fn sort_clockwise(&mut self, center: &Point<F>) {
        let cx = center.x_norm;
        let cy = center.y_norm;
        self.points.sort_by(|a, b| {
            let angle_a = (a.y_norm - cy).atan2(a.x_norm - cx);
            let angle_b = (b.y_norm - cy).atan2(b.x_norm - cx);
            angle_b.partial_cmp(&angle_a).unwrap_or(Ordering::Equal)
        });
    }
}

impl<F: Float> PartialEq for Polygon<F> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.visible == other.visible && self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon<f64> {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
        ])
    }

    #[test]
    fn test_new() {
        let poly = square();
        assert_eq!(poly.len(), 4);
        assert!(!poly.is_empty());
        assert!(poly.visible);
        assert_eq!(poly.color, "black");
    }

    #[test]
    fn test_empty() {
        let poly: Polygon<f64> = Polygon::empty();
        assert!(poly.is_empty());
        assert!(poly.centroid().is_none());
    }

    #[test]
    fn test_centroid_mean() {
        let centroid = square().centroid().unwrap();
        assert_relative_eq!(centroid.x_norm, 1.0);
        assert_relative_eq!(centroid.y_norm, 1.0);
    }

    #[test]
    fn test_centroid_uses_normalized_coordinates() {
        let mut poly = square();
        let shift = [[1.0, 0.0, 10.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        poly.normalize(&shift);
        let centroid = poly.centroid().unwrap();
        assert_relative_eq!(centroid.x_norm, 11.0);
        assert_relative_eq!(centroid.y_norm, 1.0);
    }

    #[test]
    fn test_sort_clockwise() {
        // Start from a counter-clockwise ordering around (1, 1)
        let mut poly = Polygon::new(vec![
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 0.0),
        ]);
        let center = poly.centroid().unwrap();
        poly.sort_clockwise(&center);

        // Descending angle: upper-left, upper-right, lower-right, lower-left
        assert_eq!(poly.points[0], Point::new(0.0, 2.0));
        assert_eq!(poly.points[1], Point::new(2.0, 2.0));
        assert_eq!(poly.points[2], Point::new(2.0, 0.0));
        assert_eq!(poly.points[3], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_sort_clockwise_is_stable() {
        let mut first = Point::new(2.0_f64, 2.0);
        first.is_intersection = true;
        let duplicate = Point::new(2.0, 2.0);

        let mut poly = Polygon::new(vec![first, Point::new(0.0, 2.0), duplicate]);
        let center = Point::new(1.0, 1.0);
        poly.sort_clockwise(&center);

        // The two coincident points keep their insertion order
        assert!(poly.points[1].is_intersection);
        assert!(!poly.points[2].is_intersection);
    }

    #[test]
    fn test_normalize_all_points() {
        let mut poly = square();
        let double = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
        poly.normalize(&double);
        assert_relative_eq!(poly.points[2].x_norm, 4.0);
        assert_relative_eq!(poly.points[2].y_norm, 4.0);
        // Raw coordinates untouched
        assert_relative_eq!(poly.points[2].x, 2.0);
    }
}
