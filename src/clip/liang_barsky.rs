//! Liang-Barsky parametric line clipping.

use crate::primitives::{Line, Orientation, Window};
use crate::tolerance::epsilon;
use num_traits::Float;

/// Clips a line segment against the window using Liang-Barsky.
///
/// The segment is treated parametrically as `P(u) = p1 + u·(p2 − p1)` with
/// `u ∈ [0, 1]`. Returns a copy of the line; when an endpoint is replaced by
/// a window-boundary intersection, the new point is tagged `is_intersection`
/// and oriented [`Orientation::Entering`] (the parametric entry at `u1`) or
/// [`Orientation::Exiting`] (the exit at `u2`). Endpoints that survive
/// unclipped keep [`Orientation::Unused`]. The polygon clipper consumes
/// these tags.
///
/// When the entry and exit collapse onto the same location (the segment
/// touches the window at a single point), the exit point is shifted down by
/// the fixed tolerance and the entry marker is dropped, so the touch cannot
/// read as both an entry and an exit at identical coordinates.
pub fn liang_barsky<F: Float>(window: &Window<F>, line: &Line<F>) -> Line<F> {
    let mut line = line.clone();
    let mut u1 = F::zero();
    let mut u2 = F::one();

    let dx = line.p2.x_norm - line.p1.x_norm;
    let dy = line.p2.y_norm - line.p1.y_norm;

    // One (p, q) constraint per boundary: left, right, bottom, top
    let p = [-dx, dx, -dy, dy];
    let q = [
        line.p1.x_norm - window.xmin(),
        window.xmax() - line.p1.x_norm,
        line.p1.y_norm - window.ymin(),
        window.ymax() - line.p1.y_norm,
    ];

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi.abs() < epsilon() {
            if qi < F::zero() {
                // Parallel to this boundary and outside it
                line.visible = false;
                return line;
            }
        } else {
            let r = qi / pi;
            if pi < F::zero() {
                u1 = u1.max(r);
            } else {
                u2 = u2.min(r);
            }
        }
    }

    if u1 > u2 {
        line.visible = false;
        return line;
    }

    let mut q1 = line.p1;
    let mut q2 = line.p2;

    if u1 > F::zero() {
        q1.x_norm = line.p1.x_norm + dx * u1;
        q1.y_norm = line.p1.y_norm + dy * u1;
        q1.is_intersection = true;
        q1.orientation = Orientation::Entering;
    }

    if u2 < F::one() {
        q2.x_norm = line.p1.x_norm + dx * u2;
        q2.y_norm = line.p1.y_norm + dy * u2;
        q2.is_intersection = true;
        q2.orientation = Orientation::Exiting;
    }

    line.p1 = q1;
    line.p2 = q2;
    line.visible = true;

    if line.p1.coincides_with(&line.p2) {
        let eps = epsilon();
        line.p2.x_norm = line.p2.x_norm - eps;
        line.p2.y_norm = line.p2.y_norm - eps;
        line.p1.orientation = Orientation::Unused;
    }

    line
}
