// Centralized tolerances and helpers for corner geometry

pub const EPS_ANGLE: f64 = 1e-5;          // α window around 0 (fold-back) and π (straight)
pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold
pub const EPS_DENOM: f64 = 1e-12;         // denominator guard for ratios
pub const EPS_POS: f64 = 1e-9;            // point coincidence threshold in tests/invariants

#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }
#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den.abs() <= EPS_DENOM { fallback } else { num / den }
}
