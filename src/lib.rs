//! viewclip - 2D window clipping kernel
//!
//! Computes the visible portion of geometry against a rectangular clip
//! window in normalized device coordinates: Cohen-Sutherland and Liang-Barsky
//! for line segments, Weiler-Atherton for polygons. The calling application
//! owns coordinate-system setup and rendering; this crate only consumes
//! already-normalized points and hands back reduced geometry.

pub mod clip;
pub mod primitives;
pub mod ring;
pub mod tolerance;

pub use clip::{clip_point, cohen_sutherland, liang_barsky, weiler_atherton};
pub use primitives::{Line, Orientation, Point, Polygon, Window};
pub use ring::CircularRing;
