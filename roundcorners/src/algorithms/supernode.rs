//! Local geometry around one anchor of a subpath.
//!
//! Tangent directions come from the neighbours' facing handles, so a
//! straight join (handles on their anchors) points at the neighbour
//! anchor itself. Trimming later moves along these tangents rather than
//! along the curve, which is exact for straight sides and an
//! approximation for curved ones.

use super::outcome::Rejection;
use crate::model::{Subpath, Vec2};

/// One side of a corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Side {
    /// Index of the neighbouring node.
    pub idx: usize,
    /// Anchor to the neighbour's handle that faces this corner.
    pub dir: Vec2,
    pub dist: f64,
    /// The corner's own handle on this side relative to the anchor, or
    /// `dir` when it has none. Never longer than `dist`.
    pub handle: Vec2,
    pub hlen: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Supernode {
    pub idx: usize,
    pub anchor: Vec2,
    pub prev: Side,
    pub next: Side,
}

/// Neighbour indices of `idx`, or `Boundary` when the corner has no
/// usable neighbour on one side.
///
/// The last index is never roundable: on a closed subpath it duplicates
/// node 0, which wraps around to the second-to-last node instead.
pub fn neighbours(sp: &Subpath, idx: usize) -> Result<(usize, usize), Rejection> {
    let len = sp.len();
    if idx + 1 >= len {
        return Err(Rejection::Boundary);
    }
    let prev = if idx == 0 {
        if !sp.is_closed() {
            return Err(Rejection::Boundary);
        }
        len - 2
    } else {
        idx - 1
    };
    if prev == idx {
        return Err(Rejection::Boundary);
    }
    Ok((prev, idx + 1))
}

/// Build the supernode for `idx`, rejecting corners with a neighbour or
/// handle closer than `radius`.
pub fn build(sp: &Subpath, idx: usize, radius: f64) -> Result<Supernode, Rejection> {
    let (prev_idx, next_idx) = neighbours(sp, idx)?;
    let t = &sp.nodes[idx];
    let p = &sp.nodes[prev_idx];
    let n = &sp.nodes[next_idx];

    let prev = side(prev_idx, p.out_handle - t.anchor, t.in_handle - t.anchor);
    let next = side(next_idx, n.in_handle - t.anchor, t.out_handle - t.anchor);

    // Both neighbour distances are checked before either handle length.
    for s in [&prev, &next] {
        if s.dist < radius {
            log::debug!("neighbour {} is closer than the radius: {} < {}", s.idx, s.dist, radius);
            return Err(Rejection::TooSmall(s.dist));
        }
    }
    for s in [&prev, &next] {
        if s.hlen < radius {
            log::debug!("handle towards {} is shorter than the radius: {} < {}", s.idx, s.hlen, radius);
            return Err(Rejection::TooSmall(s.hlen));
        }
    }

    Ok(Supernode { idx, anchor: t.anchor, prev, next })
}

fn side(idx: usize, dir: Vec2, own: Vec2) -> Side {
    let dist = dir.length();
    let handle = if own == Vec2::ZERO { dir } else { own };
    let hlen = handle.length();
    // A handle reaching past the neighbour would trim beyond it.
    if hlen > dist {
        return Side { idx, dir, dist, handle: handle * (dist / hlen), hlen: dist };
    }
    Side { idx, dir, dist, handle, hlen }
}
