//! Circular traversal over a polygon's points.
//!
//! The polygon clipper walks its two augmented boundaries indefinitely
//! forward (and occasionally backward) without wrap-around bookkeeping at the
//! call sites. The ring is array-backed with an integer cursor — index
//! arithmetic modulo the length — rather than a linked structure.

use crate::primitives::{Point, Polygon};
use num_traits::Float;

/// A cyclic sequence of points with a movable cursor.
///
/// The ring owns its points; it is built from a copy of a point list and
/// never aliases the source polygon. An empty ring has no current point —
/// callers check [`is_empty`](CircularRing::is_empty) before traversing.
#[derive(Debug, Clone)]
pub struct CircularRing<F> {
    points: Vec<Point<F>>,
    cursor: usize,
}

impl<F: Float> CircularRing<F> {
    /// Creates a ring over the given points, cursor on the first.
    #[inline]
    pub fn new(points: Vec<Point<F>>) -> Self {
        Self { points, cursor: 0 }
    }

    /// Creates a ring from a polygon's points.
    #[inline]
    pub fn from_polygon(polygon: &Polygon<F>) -> Self {
        Self::new(polygon.points.clone())
    }

    /// Returns the number of points on the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    pub fn current(&self) -> &Point<F> {
        &self.points[self.cursor]
    }

    /// Returns a mutable reference to the point under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    pub fn current_mut(&mut self) -> &mut Point<F> {
        &mut self.points[self.cursor]
    }

    /// Moves the cursor one step forward, wrapping past the end.
    #[inline]
    pub fn advance(&mut self) {
        if !self.points.is_empty() {
            self.cursor = (self.cursor + 1) % self.points.len();
        }
    }

    /// Moves the cursor one step backward, wrapping past the start.
    #[inline]
    pub fn retreat(&mut self) {
        if !self.points.is_empty() {
            self.cursor = (self.cursor + self.points.len() - 1) % self.points.len();
        }
    }

    /// Iterates one full lap starting at the cursor, without moving it.
    pub fn iter(&self) -> impl Iterator<Item = &Point<F>> {
        let n = self.points.len();
        let start = self.cursor;
        (0..n).map(move |i| &self.points[(start + i) % n])
    }
}
