use super::tolerance::{clamp, safe_div};
use crate::model::Vec2;

/// Angle between `a` and `b` in [0, π], from the signed dot product.
///
/// The cosine is clamped so near-parallel inputs cannot leave acos's domain.
pub fn interior_angle(a: Vec2, b: Vec2) -> f64 {
    let denom = a.length() * b.length();
    let cos = safe_div(a.dot(b), denom, 1.0);
    clamp(cos, -1.0, 1.0).acos()
}

/// Point `dist` away from `origin` along `dir`.
#[inline]
pub fn offset_along(origin: Vec2, dir: Vec2, dist: f64) -> Vec2 {
    origin + dir.scale_to(dist)
}
