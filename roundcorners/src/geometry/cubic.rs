//! Cubic Bézier segments between consecutive path nodes.
//!
//! The corner engine only produces control points; these helpers evaluate
//! the resulting segments so callers can check how closely a fillet
//! follows its circle.

use crate::model::{Node, Vec2};

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug)]
pub struct CubicBezier {
    pub p0: Vec2, // Start point
    pub p1: Vec2, // First control point
    pub p2: Vec2, // Second control point
    pub p3: Vec2, // End point
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The segment drawn from node `a` to the node `b` that follows it.
    pub fn between(a: &Node, b: &Node) -> Self {
        Self::new(a.anchor, a.out_handle, b.in_handle, b.anchor)
    }

    /// True when both control points sit on their endpoints.
    pub fn is_line(&self) -> bool {
        self.p1 == self.p0 && self.p2 == self.p3
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f64) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Vec2 {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// Evaluate the tangent (derivative) at parameter t.
    pub fn tangent(&self, t: f64) -> Vec2 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        (self.p1 - self.p0) * (3.0 * mt2)
            + (self.p2 - self.p1) * (6.0 * mt * t)
            + (self.p3 - self.p2) * (3.0 * t2)
    }

    /// Largest deviation of sampled curve points from a circle.
    pub fn max_radial_error(&self, center: Vec2, radius: f64, samples: usize) -> f64 {
        let n = samples.max(1);
        (0..=n)
            .map(|i| {
                let p = self.eval(i as f64 / n as f64);
                ((p - center).length() - radius).abs()
            })
            .fold(0.0, f64::max)
    }
}
