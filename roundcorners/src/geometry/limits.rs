// Centralized ingestion limits to harden against untrusted input (JSON/SVG)

// Document caps
pub const MAX_PATHS: usize = 10_000;
pub const MAX_SELECTION: usize = 200_000;

// SVG caps
pub const MAX_SVG_TOKENS: usize = 8 * 1024 * 1024; // 8 MB worth of characters in the 'd' string
pub const MAX_SVG_COMMANDS: usize = 200_000;
pub const MAX_SVG_SUBPATHS: usize = 10_000;
pub const MAX_SVG_NODES: usize = 500_000;
pub const MAX_TRANSFORM_LEN: usize = 4 * 1024;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const RADIUS_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_radius_bounds(r: f64) -> bool { r.is_finite() && r > 0.0 && r <= RADIUS_MAX }
