//! Cohen-Sutherland line clipping.

use crate::primitives::{Line, Point, Window};
use num_traits::Float;

const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BELOW: u8 = 0b0100;
const ABOVE: u8 = 0b1000;

/// Computes the 4-bit region code of a point relative to the window.
///
/// ```text
///  1001 | 1000 | 1010
/// ------+------+------ ymax
///  0001 | 0000 | 0010
/// ------+------+------ ymin
///  0101 | 0100 | 0110
///      xmin   xmax
/// ```
#[inline]
fn outcode<F: Float>(point: &Point<F>, window: &Window<F>) -> u8 {
    let mut code = 0;

    if point.y_norm > window.ymax() {
        code |= ABOVE;
    } else if point.y_norm < window.ymin() {
        code |= BELOW;
    }

    if point.x_norm > window.xmax() {
        code |= RIGHT;
    } else if point.x_norm < window.xmin() {
        code |= LEFT;
    }

    code
}

/// Clips a line segment against the window using Cohen-Sutherland.
///
/// Returns a copy of the line with `visible` indicating whether any portion
/// remains, and endpoints moved onto the window boundary when the segment is
/// partially visible. The input is never mutated.
///
/// Each iteration either accepts (both region codes zero), rejects (the codes
/// share an exterior half-plane), or clips the outside endpoint against the
/// violated boundary and re-codes it, so the loop strictly shrinks the
/// segment until it resolves.
pub fn cohen_sutherland<F: Float>(window: &Window<F>, line: &Line<F>) -> Line<F> {
    let mut line = line.clone();
    let mut code_a = outcode(&line.p1, window);
    let mut code_b = outcode(&line.p2, window);

    loop {
        if (code_a | code_b) == 0 {
            line.visible = true;
            return line;
        }
        if (code_a & code_b) != 0 {
            line.visible = false;
            return line;
        }

        // Clip whichever endpoint is outside; starting from that endpoint
        // keeps its original coordinates for later re-normalization.
        let code_out = if code_a != 0 { code_a } else { code_b };
        let mut p = if code_out == code_a { line.p1 } else { line.p2 };

        // Exact comparisons: the special cases exist to dodge a zero-slope
        // denominator, and only an exactly vertical segment guarantees both
        // endpoints share their left/right bits
        if line.p1.x_norm == line.p2.x_norm {
            // Vertical segment: only the top or bottom bound can cut it
            p.y_norm = if code_out & ABOVE != 0 {
                window.ymax()
            } else {
                window.ymin()
            };
            p.x_norm = line.p1.x_norm;
        } else if line.p1.y_norm == line.p2.y_norm {
            // Horizontal segment: only the left or right bound can cut it
            p.x_norm = if code_out & LEFT != 0 {
                window.xmin()
            } else {
                window.xmax()
            };
            p.y_norm = line.p1.y_norm;
        } else {
            let slope = (line.p2.y_norm - line.p1.y_norm) / (line.p2.x_norm - line.p1.x_norm);

            if code_out & ABOVE != 0 {
                p.y_norm = window.ymax();
                p.x_norm = line.p1.x_norm + (window.ymax() - line.p1.y_norm) / slope;
            } else if code_out & BELOW != 0 {
                p.y_norm = window.ymin();
                p.x_norm = line.p1.x_norm + (window.ymin() - line.p1.y_norm) / slope;
            } else if code_out & RIGHT != 0 {
                p.x_norm = window.xmax();
                p.y_norm = line.p1.y_norm + slope * (window.xmax() - line.p1.x_norm);
            } else {
                p.x_norm = window.xmin();
                p.y_norm = line.p1.y_norm + slope * (window.xmin() - line.p1.x_norm);
            }
        }

        if code_out == code_a {
            line.p1 = p;
            code_a = outcode(&line.p1, window);
        } else {
            line.p2 = p;
            code_b = outcode(&line.p2, window);
        }
    }
}
