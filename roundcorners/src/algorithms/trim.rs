use super::outcome::Rejection;
use super::supernode::Supernode;
use crate::geometry::math::{interior_angle, offset_along};
use crate::geometry::tolerance::{near_zero, EPS_ANGLE};
use crate::model::Vec2;
use std::f64::consts::PI;

/// How far back a corner is cut for a given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrimSolution {
    /// Interior angle between the two handles, in (0, π).
    pub alpha: f64,
    pub trim: f64,
    pub trim_prev: Vec2,
    pub trim_next: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trim {
    Cut(TrimSolution),
    /// α ≈ π: the join is already straight.
    Straight,
    Rejected(Rejection),
}

/// Solve the corner angle and trim distance for `radius`.
///
/// The trim may use at most `trim_factor` of the shorter side.
pub fn solve(sn: &Supernode, radius: f64, trim_factor: f64) -> Trim {
    let alpha = interior_angle(sn.prev.handle, sn.next.handle);
    if alpha < EPS_ANGLE {
        return Trim::Rejected(Rejection::Degenerate);
    }
    if near_zero(alpha - PI, EPS_ANGLE) {
        return Trim::Straight;
    }

    let trim = radius / (0.5 * alpha).tan();
    if !(trim >= 0.0) || !trim.is_finite() {
        log::error!(
            "at node {}: angle={}°, trim is invalid: {}",
            sn.idx,
            alpha.to_degrees(),
            trim
        );
        return Trim::Rejected(Rejection::Internal);
    }

    let budget = trim_factor * sn.prev.hlen.min(sn.next.hlen);
    if trim > budget {
        log::debug!("node {}: trim {} exceeds {} x handle length", sn.idx, trim, trim_factor);
        return Trim::Rejected(Rejection::TooSmall(budget));
    }

    Trim::Cut(TrimSolution {
        alpha,
        trim,
        trim_prev: offset_along(sn.anchor, sn.prev.handle, trim),
        trim_next: offset_along(sn.anchor, sn.next.handle, trim),
    })
}
