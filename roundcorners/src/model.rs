use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, o: Vec2) -> f64 {
        self.x * o.x + self.y * o.y
    }

    /// z component of the 3D cross product.
    #[inline]
    pub fn cross(self, o: Vec2) -> f64 {
        self.x * o.y - self.y * o.x
    }

    /// Counter-clockwise quarter turn: (x, y) -> (-y, x).
    #[inline]
    pub fn rot90(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Same direction, length `len`. Zero stays zero.
    #[inline]
    pub fn scale_to(self, len: f64) -> Vec2 {
        let l = self.length();
        if l > 0.0 { self * (len / l) } else { Vec2::ZERO }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f64) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

/// One path vertex with its two bezier handles, all in absolute coordinates.
///
/// A handle equal to the anchor means "no handle": the segment on that side
/// is a straight line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub in_handle: Vec2,
    pub anchor: Vec2,
    pub out_handle: Vec2,
}

impl Node {
    pub fn new(in_handle: Vec2, anchor: Vec2, out_handle: Vec2) -> Self {
        Self { in_handle, anchor, out_handle }
    }

    /// A node without handles.
    pub fn corner(anchor: Vec2) -> Self {
        Self { in_handle: anchor, anchor, out_handle: anchor }
    }

    pub fn has_in_handle(&self) -> bool {
        self.in_handle != self.anchor
    }

    pub fn has_out_handle(&self) -> bool {
        self.out_handle != self.anchor
    }

    pub fn map(&self, f: impl Fn(Vec2) -> Vec2) -> Node {
        Node {
            in_handle: f(self.in_handle),
            anchor: f(self.anchor),
            out_handle: f(self.out_handle),
        }
    }
}

/// An ordered run of nodes. Closed iff the first and last anchors coincide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subpath {
    pub nodes: Vec<Node>,
}

impl Subpath {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Straight-sided polygon through `points`; `closed` repeats the first
    /// point at the end.
    pub fn polygon(points: &[Vec2], closed: bool) -> Self {
        let mut nodes: Vec<Node> = points.iter().copied().map(Node::corner).collect();
        if closed {
            if let Some(&first) = nodes.first() {
                nodes.push(first);
            }
        }
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(a), Some(b)) if self.nodes.len() > 1 => a.anchor == b.anchor,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub subpaths: Vec<Subpath>,
}

impl Path {
    pub fn new(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    pub fn node_count(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }

    pub fn map_points(&mut self, f: impl Fn(Vec2) -> Vec2) {
        for sp in &mut self.subpaths {
            for n in &mut sp.nodes {
                *n = n.map(&f);
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        self.subpaths.iter().all(|sp| {
            sp.nodes
                .iter()
                .all(|n| n.in_handle.is_finite() && n.anchor.is_finite() && n.out_handle.is_finite())
        })
    }
}

/// Fillet shape inserted at a corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[default]
    #[serde(rename = "arc")]
    Arc,
    /// Declared by hosts but rounds exactly like `Arc`.
    #[serde(rename = "arc+cross")]
    ArcCross,
    #[serde(rename = "line")]
    Line,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Arc => "arc",
            Method::ArcCross => "arc+cross",
            Method::Line => "line",
        }
    }

    pub fn is_bevel(&self) -> bool {
        matches!(self, Method::Line)
    }
}

impl std::str::FromStr for Method {
    type Err = crate::error::RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "arc" => Ok(Method::Arc),
            "arc+cross" => Ok(Method::ArcCross),
            "line" => Ok(Method::Line),
            other => Err(crate::error::RoundError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_needs_matching_anchors() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        assert!(Subpath::polygon(&pts, true).is_closed());
        assert!(!Subpath::polygon(&pts, false).is_closed());
        assert!(!Subpath::polygon(&pts[..1], true).is_empty());
        assert!(!Subpath::polygon(&pts[..1], false).is_closed());
    }

    #[test]
    fn rot90_is_counter_clockwise() {
        let v = Vec2::new(1.0, 0.0).rot90();
        assert_eq!(v, Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::new(1.0, 0.0).cross(v), 1.0);
    }

    #[test]
    fn method_names_round_trip() {
        for m in [Method::Arc, Method::ArcCross, Method::Line] {
            assert_eq!(m.as_str().parse::<Method>().unwrap(), m);
        }
        assert!("circle".parse::<Method>().is_err());
        let json = serde_json::to_string(&Method::ArcCross).unwrap();
        assert_eq!(json, "\"arc+cross\"");
    }
}
