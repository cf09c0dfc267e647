//! Clipping algorithms: point classification, two line clippers, and the
//! polygon clipper.
//!
//! Every operation copies its input and degrades gracefully — geometry with
//! no visible portion comes back flagged `visible = false` (or as an empty
//! polygon), never as an error.
//!
//! # Example
//!
//! ```
//! use viewclip::{liang_barsky, Line, Window};
//!
//! let window: Window<f64> = Window::new(0.0, 0.0, 10.0, 10.0);
//! let line = Line::from_coords(-5.0, 5.0, 15.0, 5.0);
//!
//! let clipped = liang_barsky(&window, &line);
//! assert!(clipped.visible);
//! assert_eq!(clipped.p1.x_norm, 0.0);
//! assert_eq!(clipped.p2.x_norm, 10.0);
//! ```

mod cohen_sutherland;
mod liang_barsky;
mod weiler_atherton;

pub use cohen_sutherland::cohen_sutherland;
pub use liang_barsky::liang_barsky;
pub use weiler_atherton::weiler_atherton;

use crate::primitives::{Point, Window};
use num_traits::Float;

/// Classifies a single point against the window.
///
/// Returns a copy with `visible` set by the inclusive bounds test on the
/// normalized coordinates.
#[inline]
pub fn clip_point<F: Float>(window: &Window<F>, point: &Point<F>) -> Point<F> {
    let mut clipped = *point;
    clipped.visible = window.contains(point);
    clipped
}
