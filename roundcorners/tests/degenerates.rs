use roundcorners::svg::parse_path;
use roundcorners::{round_path, Method, Path, RoundOptions, SelectionKey, Subpath, Vec2};

fn key(node: usize) -> SelectionKey {
    SelectionKey::new("p", 0, node)
}

fn open(pts: &[(f64, f64)]) -> Path {
    let pts: Vec<Vec2> = pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    Path::new(vec![Subpath::polygon(&pts, false)])
}

#[test]
fn endpoints_of_open_path_are_skipped() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let d = round_path(&mut path, &[key(0), key(2)], &RoundOptions::default()).unwrap();
    assert_eq!(d.skipped_degenerate, 2);
    assert_eq!(d.inserted, 0);
}

#[test]
fn index_past_the_end_is_skipped() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let d = round_path(&mut path, &[key(1), key(40)], &RoundOptions::default()).unwrap();
    assert_eq!(d.rounded, 1);
    assert_eq!(d.skipped_degenerate, 1);
}

#[test]
fn closing_duplicate_is_not_a_corner() {
    let mut path = parse_path("M0 0 L10 0 L10 10 Z").unwrap();
    let d = round_path(&mut path, &[key(3)], &RoundOptions::default()).unwrap();
    assert_eq!(d.skipped_degenerate, 1);
}

#[test]
fn fold_back_is_degenerate() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (3.0, 0.0)]);
    let d = round_path(&mut path, &[key(1)], &RoundOptions::new(1.0, Method::Arc)).unwrap();
    assert_eq!(d.skipped_degenerate, 1);
    assert_eq!(d.warnings().len(), 1);
}

#[test]
fn straight_join_is_left_alone_quietly() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    let before = path.clone();
    let d = round_path(&mut path, &[key(1)], &RoundOptions::new(1.0, Method::Arc)).unwrap();
    assert_eq!(d.straight, 1);
    assert!(d.warnings().is_empty());
    assert_eq!(path, before);
}

#[test]
fn coincident_neighbour_is_too_small() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let d = round_path(&mut path, &[key(1)], &RoundOptions::new(1.0, Method::Arc)).unwrap();
    assert_eq!(d.skipped_small, 1);
    assert_eq!(d.skipped_small_len, Some(0.0));
}

#[test]
fn single_node_and_empty_subpaths() {
    let mut path = Path::new(vec![Subpath::default(), Subpath::polygon(&[Vec2::ZERO], false)]);
    let keys = [SelectionKey::new("p", 0, 0), SelectionKey::new("p", 1, 0)];
    let d = round_path(&mut path, &keys, &RoundOptions::default()).unwrap();
    assert_eq!(d.skipped_degenerate, 2);
}

#[test]
fn curved_closing_segment_uses_its_tangent() {
    // Node 0 is entered by a curve arriving straight down the y axis.
    let mut path = parse_path("M0 0 L20 0 L20 20 C10 20 0 10 0 0 Z").unwrap();
    let d = round_path(&mut path, &[key(0)], &RoundOptions::new(2.0, Method::Arc)).unwrap();
    assert_eq!(d.rounded, 1);
    let sp = &path.subpaths[0];
    assert!(sp.is_closed());
    assert!((sp.nodes[0].anchor - Vec2::new(0.0, 2.0)).length() < 1e-9);
    assert!((sp.nodes[1].anchor - Vec2::new(2.0, 0.0)).length() < 1e-9);
    // The incoming curve keeps its handle into the fillet.
    assert_eq!(sp.nodes[0].in_handle, Vec2::new(0.0, 10.0));
}

#[test]
fn bad_radius_is_an_error() {
    let mut path = open(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    for r in [0.0, f64::NAN, f64::INFINITY] {
        assert!(round_path(&mut path, &[key(1)], &RoundOptions::new(r, Method::Arc)).is_err());
    }
    let d = round_path(&mut path, &[key(1)], &RoundOptions::new(-2.0, Method::Arc)).unwrap();
    assert_eq!(d.rounded, 1);
}
