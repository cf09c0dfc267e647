//! The rectangular clip window.

use super::Point;
use num_traits::Float;

/// An axis-aligned rectangular clip window, stored as its four corner points.
///
/// Immutable after construction. Bounds are expected to satisfy
/// `min_x <= max_x` and `min_y <= max_y`; the constructor does not validate
/// them, consistent with the kernel's garbage-in/garbage-out contract.
#[derive(Debug, Clone)]
pub struct Window<F> {
    /// Lower-left corner.
    pub min_x_min_y: Point<F>,
    /// Upper-left corner.
    pub min_x_max_y: Point<F>,
    /// Upper-right corner.
    pub max_x_max_y: Point<F>,
    /// Lower-right corner.
    pub max_x_min_y: Point<F>,
}

impl<F: Float> Window<F> {
    /// Creates a window from its bounds.
    pub fn new(xmin: F, ymin: F, xmax: F, ymax: F) -> Self {
        Self {
            min_x_min_y: Point::new(xmin, ymin),
            min_x_max_y: Point::new(xmin, ymax),
            max_x_max_y: Point::new(xmax, ymax),
            max_x_min_y: Point::new(xmax, ymin),
        }
    }

    /// Left bound.
    #[inline]
    pub fn xmin(&self) -> F {
        self.min_x_min_y.x_norm
    }

    /// Right bound.
    #[inline]
    pub fn xmax(&self) -> F {
        self.max_x_max_y.x_norm
    }

    /// Bottom bound.
    #[inline]
    pub fn ymin(&self) -> F {
        self.min_x_min_y.y_norm
    }

    /// Top bound.
    #[inline]
    pub fn ymax(&self) -> F {
        self.max_x_max_y.y_norm
    }

    /// The corners in boundary order: lower-left, upper-left, upper-right,
    /// lower-right.
    #[inline]
    pub fn corners(&self) -> [&Point<F>; 4] {
        [
            &self.min_x_min_y,
            &self.min_x_max_y,
            &self.max_x_max_y,
            &self.max_x_min_y,
        ]
    }

    /// Inclusive containment test on the point's normalized coordinates.
    #[inline]
    pub fn contains(&self, point: &Point<F>) -> bool {
        point.x_norm >= self.xmin()
            && point.x_norm <= self.xmax()
            && point.y_norm >= self.ymin()
            && point.y_norm <= self.ymax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let w: Window<f64> = Window::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(w.min_x_min_y, Point::new(0.0, 0.0));
        assert_eq!(w.min_x_max_y, Point::new(0.0, 20.0));
        assert_eq!(w.max_x_max_y, Point::new(10.0, 20.0));
        assert_eq!(w.max_x_min_y, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_bounds() {
        let w: Window<f64> = Window::new(-5.0, -2.0, 5.0, 2.0);
        assert_eq!(w.xmin(), -5.0);
        assert_eq!(w.xmax(), 5.0);
        assert_eq!(w.ymin(), -2.0);
        assert_eq!(w.ymax(), 2.0);
    }

    #[test]
    fn test_contains_inside() {
        let w: Window<f64> = Window::new(0.0, 0.0, 10.0, 10.0);
        assert!(w.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let w: Window<f64> = Window::new(0.0, 0.0, 10.0, 10.0);
        assert!(w.contains(&Point::new(0.0, 0.0)));
        assert!(w.contains(&Point::new(10.0, 10.0)));
        assert!(w.contains(&Point::new(10.0, 0.0)));
        assert!(w.contains(&Point::new(0.0, 5.0)));
    }

    #[test]
    fn test_contains_outside() {
        let w: Window<f64> = Window::new(0.0, 0.0, 10.0, 10.0);
        assert!(!w.contains(&Point::new(-0.1, 5.0)));
        assert!(!w.contains(&Point::new(10.1, 5.0)));
        assert!(!w.contains(&Point::new(5.0, -0.1)));
        assert!(!w.contains(&Point::new(5.0, 10.1)));
    }

    #[test]
    fn test_contains_normalized_coordinates() {
        let w: Window<f64> = Window::new(0.0, 0.0, 10.0, 10.0);
        let mut p = Point::new(50.0, 50.0);
        let shrink = [[0.1, 0.0, 0.0], [0.0, 0.1, 0.0], [0.0, 0.0, 1.0]];
        p.normalize(&shrink);
        assert!(w.contains(&p));
    }
}
