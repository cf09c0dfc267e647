//! Geometry value types: points, lines, polygons, and the clip window.

mod line;
mod point;
mod polygon;
mod window;

pub use line::Line;
pub use point::{Orientation, Point};
pub use polygon::Polygon;
pub use window::Window;
