//! SVG `transform` attribute values as 2D affine matrices.

use crate::error::RoundError;
use crate::geometry::limits;
use crate::model::Vec2;
use serde::{Deserialize, Serialize};

/// `[a c e; b d f; 0 0 1]`, the SVG `matrix(a b c d e f)` layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Affine { e: tx, f: ty, ..Self::IDENTITY }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Affine { a: sx, d: sy, ..Self::IDENTITY }
    }

    pub fn rotate_deg(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Affine { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    /// `self * o`: applies `o` first.
    pub fn mul(&self, o: &Affine) -> Affine {
        Affine {
            a: self.a * o.a + self.c * o.b,
            b: self.b * o.a + self.d * o.b,
            c: self.a * o.c + self.c * o.d,
            d: self.b * o.c + self.d * o.d,
            e: self.a * o.e + self.c * o.f + self.e,
            f: self.b * o.e + self.d * o.f + self.f,
        }
    }

    /// Parse a transform list such as `translate(10 5) rotate(30, 0 0)`.
    /// Functions compose left to right, so the rightmost applies first.
    pub fn parse(s: &str) -> Result<Affine, RoundError> {
        if s.len() > limits::MAX_TRANSFORM_LEN {
            return Err(RoundError::LimitExceeded("transform length"));
        }
        let bad = |msg: &str| RoundError::InvalidTransform(format!("{}: {:?}", msg, s));
        let mut out = Affine::IDENTITY;
        let mut rest = s.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        while !rest.is_empty() {
            let open = rest.find('(').ok_or_else(|| bad("missing '('"))?;
            let close = rest.find(')').ok_or_else(|| bad("missing ')'"))?;
            if close < open {
                return Err(bad("unbalanced parentheses"));
            }
            let name = rest[..open].trim();
            let args: Vec<f64> = rest[open + 1..close]
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
                .collect::<Option<_>>()
                .ok_or_else(|| bad("malformed number"))?;
            let m = match (name, args.as_slice()) {
                ("matrix", &[a, b, c, d, e, f]) => Affine { a, b, c, d, e, f },
                ("translate", &[tx]) => Affine::translate(tx, 0.0),
                ("translate", &[tx, ty]) => Affine::translate(tx, ty),
                ("scale", &[s]) => Affine::scale(s, s),
                ("scale", &[sx, sy]) => Affine::scale(sx, sy),
                ("rotate", &[deg]) => Affine::rotate_deg(deg),
                ("rotate", &[deg, cx, cy]) => Affine::translate(cx, cy)
                    .mul(&Affine::rotate_deg(deg))
                    .mul(&Affine::translate(-cx, -cy)),
                ("skewX", &[deg]) => Affine { c: deg.to_radians().tan(), ..Affine::IDENTITY },
                ("skewY", &[deg]) => Affine { b: deg.to_radians().tan(), ..Affine::IDENTITY },
                _ => return Err(bad(&format!("unknown function or arity {}({})", name, args.len()))),
            };
            out = out.mul(&m);
            rest = rest[close + 1..].trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        }
        Ok(out)
    }
}
