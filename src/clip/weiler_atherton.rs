//! Weiler-Atherton polygon clipping.
//!
//! The orchestrator runs Liang-Barsky over every polygon edge to find the
//! window-boundary crossings, builds two circular rings — the subject
//! boundary interleaved with its crossings, and the window boundary
//! (corners plus crossings, sorted clockwise) — then walks the rings
//! following the entry/exit markers, switching rings at each crossing, to
//! assemble the clipped loop.

use crate::clip::liang_barsky;
use crate::primitives::{Line, Orientation, Point, Polygon, Window};
use crate::ring::CircularRing;
use crate::tolerance::epsilon;
use num_traits::Float;

/// The two augmented point lists the traversal runs over, or the verdict
/// when the polygon never crosses the window boundary.
enum ClipLists<F> {
    NoCrossings { inside: bool },
    Rings { subject: Vec<Point<F>>, boundary: Vec<Point<F>> },
}

/// Epsilon-tolerant test that every vertex lies within the window bounds.
fn polygon_inside_window<F: Float>(window: &Window<F>, polygon: &Polygon<F>) -> bool {
    let eps = epsilon::<F>();
    polygon.points.iter().all(|p| {
        p.x_norm + eps >= window.xmin()
            && p.x_norm <= window.xmax() + eps
            && p.y_norm + eps >= window.ymin()
            && p.y_norm <= window.ymax() + eps
    })
}

/// Clips each wrap-around edge with Liang-Barsky and collects the subject
/// ring (vertices interleaved with crossings, in edge order) and the window
/// ring (corners then crossings, sorted clockwise around their centroid).
fn build_clip_lists<F: Float>(window: &Window<F>, polygon: &Polygon<F>) -> ClipLists<F> {
    let mut subject = Vec::new();
    let mut crossings = Vec::new();
    let n = polygon.points.len();

    for i in 0..n {
        let a = &polygon.points[i];
        let b = &polygon.points[(i + 1) % n];
        // Ring points are seeded from the normalized coordinates, so raw and
        // normalized pairs agree on everything the traversal touches
        let p1 = Point::new(a.x_norm, a.y_norm);
        let p2 = Point::new(b.x_norm, b.y_norm);

        subject.push(p1);

        let edge = liang_barsky(window, &Line::new(p1, p2));
        if edge.p1.is_intersection {
            subject.push(edge.p1);
            crossings.push(edge.p1);
        }
        if edge.p2.is_intersection {
            subject.push(edge.p2);
            crossings.push(edge.p2);
        }
    }

    if crossings.is_empty() {
        return ClipLists::NoCrossings {
            inside: polygon_inside_window(window, polygon),
        };
    }

    let mut boundary = Polygon::empty();
    for corner in window.corners() {
        boundary.points.push(*corner);
    }
    boundary.points.extend(crossings.iter().copied());

    // Clockwise angular order interleaves the crossings with the corners
    // along the window boundary; the sort is stable, so a crossing that
    // lands exactly on a corner stays behind it
    if let Some(center) = boundary.centroid() {
        boundary.sort_clockwise(&center);
    }

    ClipLists::Rings {
        subject,
        boundary: boundary.points,
    }
}

/// Advances the cursor to the first entering point, capped at one full lap.
///
/// If no entry point exists the search exhausts the lap and reports whatever
/// the cursor lands on; the traversal then finds no entering point remaining
/// and falls through to the degenerate-output path.
fn find_entry<F: Float>(ring: &mut CircularRing<F>) -> Point<F> {
    let mut iterations = 0;
    while !ring.current().orientation.is_entering() && iterations < ring.len() {
        ring.advance();
        iterations += 1;
    }
    *ring.current()
}

/// Advances the cursor to the point matching `target`'s normalized
/// coordinates and the requested orientation, capped at one full lap.
///
/// Coordinates are compared exactly: both rings carry copies of the same
/// computed values, and quantized matching would conflate an epsilon-nudged
/// degenerate crossing with its twin.
fn seek<F: Float>(
    ring: &mut CircularRing<F>,
    target: &Point<F>,
    orientation: Orientation,
) -> Point<F> {
    for _ in 0..ring.len() {
        let candidate = ring.current();
        if candidate.x_norm == target.x_norm
            && candidate.y_norm == target.y_norm
            && candidate.orientation == orientation
        {
            break;
        }
        ring.advance();
    }
    *ring.current()
}

/// Clips a polygon against the window using Weiler-Atherton.
///
/// Returns one connected clipped loop. A polygon that never crosses the
/// window boundary comes back unchanged (fully inside) or empty and
/// invisible (fully outside). A polygon that only touches the window at a
/// coincident vertex degenerates to the touching point(s). The output
/// inherits the input's color, never its visibility.
///
/// The window ring is ordered clockwise, so subject boundaries are expected
/// in clockwise order as well; the clipped loop comes out winding the same
/// way. The traversal emits a single loop — subjects whose true intersection
/// is several disjoint loops are outside its envelope.
pub fn weiler_atherton<F: Float>(window: &Window<F>, polygon: &Polygon<F>) -> Polygon<F> {
    let (subject, boundary) = match build_clip_lists(window, polygon) {
        ClipLists::NoCrossings { inside: true } => return polygon.clone(),
        ClipLists::NoCrossings { inside: false } => {
            let mut clipped = Polygon::empty();
            clipped.visible = false;
            return clipped;
        }
        ClipLists::Rings { subject, boundary } => (subject, boundary),
    };

    let mut ring_a = CircularRing::new(subject.clone());
    let mut ring_b = CircularRing::new(boundary.clone());

    let mut clipped = Polygon::empty();
    let mut entry = find_entry(&mut ring_a);

    // Each pass consumes at least one entering marker, so ring A's length
    // caps the pass count for well-formed input; the cap only bites on
    // malformed geometry
    for _ in 0..ring_a.len() {
        let mut remaining = false;
        for _ in 0..ring_a.len() {
            if ring_a.current().orientation.is_entering() {
                remaining = true;
            }
            ring_a.advance();
        }
        if !remaining {
            break;
        }

        // Walk the subject ring from the entry point, consuming into the
        // output, until the boundary exits the window
        let mut point = seek(&mut ring_a, &entry, Orientation::Entering);
        let mut steps = 0;
        while !point.orientation.is_exiting() && steps < ring_a.len() {
            let consumed = point.orientation.consume();
            ring_a.current_mut().orientation = consumed;
            clipped.points.push(*ring_a.current());
            ring_a.advance();
            point = *ring_a.current();
            steps += 1;
        }

        // Switch to the window ring at the exit and walk it until the next
        // entry closes this sub-loop
        let mut boundary_point = seek(&mut ring_b, &point, Orientation::Exiting);
        let mut steps = 0;
        while !boundary_point.orientation.is_entering() && steps < ring_b.len() {
            let consumed = boundary_point.orientation.consume();
            ring_b.current_mut().orientation = consumed;
            clipped.points.push(*ring_b.current());
            ring_b.advance();
            boundary_point = *ring_b.current();
            steps += 1;
        }

        entry = boundary_point;
    }

    // Boundary-touching degenerate: the polygon meets the window only at
    // coincident vertices, so no entry/exit pair survived. The touching
    // crossings themselves are the visible remnant.
    if clipped.points.is_empty() {
        for crossing in boundary.iter().filter(|p| p.is_intersection) {
            let mut point = *crossing;
            point.visible = true;
            clipped.points.push(point);
        }
    }

    clipped.color = polygon.color.clone();
    clipped
}
