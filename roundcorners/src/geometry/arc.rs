//! Circle fitting at a trimmed corner and cubic approximation of its arcs.
//!
//! `bezier_handles` follows A. Riškus, "Approximation of a Cubic Bezier
//! Curve by Circular Arcs and Vice Versa", ITC 35(4), 2006, in the closed
//! form popularised by Hans Muller.

use super::tolerance::{safe_div, EPS_LEN};
use crate::model::Vec2;

/// Circle tangent to both trimmed sides of a corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFrame {
    pub center: Vec2,
    /// Point on the circle halfway between the two trim points.
    pub midpoint: Vec2,
}

/// Locate the fillet circle from the corner anchor and its two trim points.
///
/// The centre lies on the bisector of the corner at `sqrt(radius² + trim²)`
/// from the anchor (a trim point, the anchor and the centre form a right
/// triangle); the arc midpoint is `radius` closer to the anchor.
/// Returns `None` when the trim points cancel out (a straight join).
pub fn center_and_midpoint(
    anchor: Vec2,
    trim_prev: Vec2,
    trim_next: Vec2,
    radius: f64,
    trim: f64,
) -> Option<ArcFrame> {
    let v = (trim_prev - anchor) + (trim_next - anchor);
    let l = v.length();
    if l <= EPS_LEN {
        return None;
    }
    let cdist = (radius * radius + trim * trim).sqrt();
    Some(ArcFrame {
        center: anchor + v * (cdist / l),
        midpoint: anchor + v * ((cdist - radius) / l),
    })
}

/// Inner control points of the cubic from `p1` to `p4` that approximates
/// the arc around `c`.
///
/// Good for spans up to a half-turn; split wider arcs at their midpoint.
pub fn bezier_handles(p1: Vec2, p4: Vec2, c: Vec2) -> (Vec2, Vec2) {
    let a = p1 - c;
    let b = p4 - c;
    let q1 = a.length_sq();
    let q2 = q1 + a.dot(b);
    let k2 = safe_div(4.0 / 3.0 * ((2.0 * q1 * q2).sqrt() - q2), a.cross(b), 0.0);

    let p2 = c + a + a.rot90() * k2;
    let p3 = c + b - b.rot90() * k2;
    (p2, p3)
}
