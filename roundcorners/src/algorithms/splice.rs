//! Replace one corner node with the nodes of its fillet.

use super::outcome::{FilletShape, Outcome, Rejection};
use super::supernode;
use super::trim::{self, Trim, TrimSolution};
use crate::geometry::arc::{bezier_handles, center_and_midpoint, ArcFrame};
use crate::model::{Method, Node, Subpath};
use std::f64::consts::FRAC_PI_2;

/// Per-batch inputs shared by every corner.
#[derive(Clone, Copy, Debug)]
pub struct CornerParams {
    pub radius: f64,
    pub method: Method,
    pub trim_factor: f64,
}

/// Round the corner at `index` (already shifted by earlier insertions).
///
/// On success `sp` is replaced by a rebuilt subpath; otherwise it is left
/// exactly as it was.
pub fn round_corner(sp: &mut Subpath, index: usize, params: &CornerParams) -> Outcome {
    let sn = match supernode::build(sp, index, params.radius) {
        Ok(sn) => sn,
        Err(r) => return Outcome::Rejected(r),
    };
    let sol = match trim::solve(&sn, params.radius, params.trim_factor) {
        Trim::Cut(sol) => sol,
        Trim::Straight => return Outcome::Straight,
        Trim::Rejected(r) => return Outcome::Rejected(r),
    };
    let Some(frame) = center_and_midpoint(sn.anchor, sol.trim_prev, sol.trim_next, params.radius, sol.trim) else {
        return Outcome::Rejected(Rejection::Internal);
    };
    log::debug!(
        "node {} (prev {}, next {}): alpha={:.3}° trim={:.6}",
        index,
        sn.prev.idx,
        sn.next.idx,
        sol.alpha.to_degrees(),
        sol.trim
    );

    let (shape, nodes) = fillet_nodes(&sp.nodes[index], &sol, &frame, params.method);
    *sp = splice(sp, index, &nodes);
    Outcome::Rounded(shape)
}

/// Nodes that replace `corner`.
///
/// An arc spanning more than a quarter turn (α < 90°) gets a middle node
/// on the arc midpoint so each cubic covers at most half of it.
pub fn fillet_nodes(corner: &Node, sol: &TrimSolution, frame: &ArcFrame, method: Method) -> (FilletShape, Vec<Node>) {
    let p1 = sol.trim_prev;
    let p7 = sol.trim_next;

    // Outer handles that sat on the anchor move with the trim point so they
    // cannot end up inside the new corner.
    let prev_handle = if corner.has_in_handle() { corner.in_handle } else { p1 };
    let next_handle = if corner.has_out_handle() { corner.out_handle } else { p7 };

    if sol.alpha >= FRAC_PI_2 || method.is_bevel() {
        let (p2, p6) = if method.is_bevel() {
            (p1, p7)
        } else {
            bezier_handles(p1, p7, frame.center)
        };
        let nodes = vec![Node::new(prev_handle, p1, p2), Node::new(p6, p7, next_handle)];
        (FilletShape::TwoSegment, nodes)
    } else {
        let p4 = frame.midpoint;
        let (p2, p3) = bezier_handles(p1, p4, frame.center);
        let (p5, p6) = bezier_handles(p4, p7, frame.center);
        let nodes = vec![
            Node::new(prev_handle, p1, p2),
            Node::new(p3, p4, p5),
            Node::new(p6, p7, next_handle),
        ];
        (FilletShape::ThreeSegment, nodes)
    }
}

/// Rebuild `sp` with `sp.nodes[index]` replaced by `replacement`.
///
/// Replacing node 0 of a closed subpath also overwrites the closing node
/// with the new first node so the loop stays closed.
pub fn splice(sp: &Subpath, index: usize, replacement: &[Node]) -> Subpath {
    let closed = sp.is_closed();
    let mut nodes = Vec::with_capacity(sp.len() + replacement.len());
    nodes.extend_from_slice(&sp.nodes[..index]);
    nodes.extend_from_slice(replacement);
    nodes.extend_from_slice(&sp.nodes[index + 1..]);
    if index == 0 && closed {
        if let Some(&first) = nodes.first() {
            if let Some(last) = nodes.last_mut() {
                *last = first;
            }
        }
    }
    Subpath::new(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cubic::CubicBezier;
    use crate::model::Vec2;
    use std::f64::consts::SQRT_2;

    fn square() -> Subpath {
        Subpath::polygon(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ],
            true,
        )
    }

    fn params(radius: f64, method: Method) -> CornerParams {
        CornerParams { radius, method, trim_factor: 0.5 }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn right_angle_becomes_two_nodes() {
        let mut subpath = square();
        let out = round_corner(&mut subpath, 1, &params(2.0, Method::Arc));
        assert_eq!(out, Outcome::Rounded(FilletShape::TwoSegment));
        assert_eq!(subpath.len(), 6);
        let a = subpath.nodes[1];
        let b = subpath.nodes[2];
        assert!(close(a.anchor, Vec2::new(8.0, 0.0)));
        assert!(close(b.anchor, Vec2::new(10.0, 2.0)));
        // Straight outer sides keep no handle.
        assert_eq!(a.in_handle, a.anchor);
        assert_eq!(b.out_handle, b.anchor);
        let k = 4.0 / 3.0 * (SQRT_2 - 1.0);
        assert!(((a.out_handle - a.anchor).length() - 2.0 * k).abs() < 1e-9);
        assert!(((b.in_handle - b.anchor).length() - 2.0 * k).abs() < 1e-9);
        let arc = CubicBezier::between(&a, &b);
        assert!(arc.max_radial_error(Vec2::new(8.0, 2.0), 2.0, 32) < 1e-3);
    }

    #[test]
    fn bevel_has_no_inner_handles() {
        let mut subpath = square();
        let out = round_corner(&mut subpath, 2, &params(2.0, Method::Line));
        assert_eq!(out, Outcome::Rounded(FilletShape::TwoSegment));
        let seg = CubicBezier::between(&subpath.nodes[2], &subpath.nodes[3]);
        assert!(seg.is_line());
    }

    #[test]
    fn acute_corner_gets_midpoint_node() {
        let t = 45f64.to_radians();
        let mut subpath =
            Subpath::polygon(&[Vec2::new(20.0, 0.0), Vec2::ZERO, Vec2::new(20.0 * t.cos(), 20.0 * t.sin())], false);
        let out = round_corner(&mut subpath, 1, &params(1.0, Method::Arc));
        assert_eq!(out, Outcome::Rounded(FilletShape::ThreeSegment));
        assert_eq!(subpath.len(), 5);
        // The midpoint sits on the bisector, closest to the old corner.
        let m = subpath.nodes[2].anchor;
        assert!((m.y / m.x - (t / 2.0).tan()).abs() < 1e-9);
        // Smooth joins between the two arc pieces.
        let first = CubicBezier::between(&subpath.nodes[1], &subpath.nodes[2]);
        let second = CubicBezier::between(&subpath.nodes[2], &subpath.nodes[3]);
        assert!(first.tangent(1.0).cross(second.tangent(0.0)).abs() < 1e-9);
    }

    #[test]
    fn curved_outer_handles_are_kept() {
        let mut subpath = square();
        subpath.nodes[1].in_handle = Vec2::new(6.0, 0.0);
        subpath.nodes[1].out_handle = Vec2::new(10.0, 5.0);
        let out = round_corner(&mut subpath, 1, &params(1.0, Method::Arc));
        assert_eq!(out.inserted(), 1);
        assert_eq!(subpath.nodes[1].in_handle, Vec2::new(6.0, 0.0));
        assert_eq!(subpath.nodes[2].out_handle, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn first_node_of_closed_loop_updates_closing_node() {
        let mut subpath = square();
        let out = round_corner(&mut subpath, 0, &params(2.0, Method::Arc));
        assert_eq!(out.inserted(), 1);
        assert!(subpath.is_closed());
        assert_eq!(subpath.nodes.first(), subpath.nodes.last());
        assert!(close(subpath.nodes[0].anchor, Vec2::new(0.0, 2.0)));
        assert!(close(subpath.nodes[1].anchor, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn rejected_corner_leaves_subpath_alone() {
        let mut subpath = square();
        let out = round_corner(&mut subpath, 4, &params(2.0, Method::Arc));
        assert_eq!(out, Outcome::Rejected(Rejection::Boundary));
        assert_eq!(subpath, square());
        let out = round_corner(&mut subpath, 1, &params(6.0, Method::Arc));
        assert!(matches!(out, Outcome::Rejected(Rejection::TooSmall(_))));
        assert_eq!(subpath, square());
    }

    #[test]
    fn splice_leaves_input_untouched() {
        let sp = square();
        let before = sp.clone();
        let out = splice(&sp, 2, &[Node::corner(Vec2::ZERO); 3]);
        assert_eq!(sp, before);
        assert_eq!(out.len(), sp.len() + 2);
    }
}
