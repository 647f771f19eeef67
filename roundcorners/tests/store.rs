use roundcorners::selection::parse_keys;
use roundcorners::svg::parse_path;
use roundcorners::{round_corners, MemoryStore, Method, PathStore, RoundError, RoundOptions};
use serde_json::json;

fn doc() -> MemoryStore {
    MemoryStore::from_json_value(json!({
        "paths": [
            {"id": "box", "d": "M 0,0 L 10,0 L 10,10 L 0,10 Z"},
            {"id": "small", "d": "M 0,0 H 1 V 1 H 0 Z", "transform": "scale(10)"},
            {"id": "open", "d": "M 0,0 L 10,0 L 10,10"}
        ]
    }))
    .unwrap()
}

#[test]
fn rounds_across_paths() {
    let mut store = doc();
    let keys = parse_keys(&["open:0:1", "box:0:1", "box:0:3"]).unwrap();
    let d = round_corners(&mut store, &keys, &RoundOptions::new(2.0, Method::Arc)).unwrap();
    assert_eq!(d.rounded, 3);
    assert_eq!(d.inserted, 3);

    let boxed = parse_path(&store.get("box").unwrap().d).unwrap();
    assert_eq!(boxed.node_count(), 5 + 2);
    assert!(boxed.subpaths[0].is_closed());
    let open = parse_path(&store.get("open").unwrap().d).unwrap();
    assert_eq!(open.node_count(), 4);
    assert!(!open.subpaths[0].is_closed());
}

#[test]
fn radius_is_measured_after_the_transform() {
    let mut store = doc();
    // 1x1 square drawn at 10x: radius 2 only fits once the scale is baked in.
    let keys = parse_keys(&["small:0:1"]).unwrap();
    let d = round_corners(&mut store, &keys, &RoundOptions::new(2.0, Method::Arc)).unwrap();
    assert_eq!(d.rounded, 1);
    let el = store.get("small").unwrap();
    assert_eq!(el.transform, None);
    assert!(el.d.starts_with("M 0,0 L 8,0 C "));
}

#[test]
fn untouched_paths_stay_byte_identical() {
    let mut store = doc();
    let before = store.get("open").unwrap().d.clone();
    round_corners(&mut store, &parse_keys(&["box:0:2"]).unwrap(), &RoundOptions::default()).unwrap();
    assert_eq!(store.get("open").unwrap().d, before);
}

#[test]
fn unknown_path_is_an_error() {
    let mut store = doc();
    let err = round_corners(&mut store, &parse_keys(&["ghost:0:1"]).unwrap(), &RoundOptions::default()).unwrap_err();
    assert!(matches!(err, RoundError::PathNotFound(id) if id == "ghost"));
}

#[test]
fn empty_selection_changes_nothing() {
    let mut store = doc();
    let before = store.to_json_value();
    assert!(matches!(round_corners(&mut store, &[], &RoundOptions::default()), Err(RoundError::NoSelection)));
    assert_eq!(store.to_json_value(), before);
}

#[test]
fn commit_round_trips_through_lookup() {
    let mut store = doc();
    let h = store.lookup("box").unwrap();
    let p = h.to_subpaths().unwrap();
    store.commit(h, &p).unwrap();
    let again = store.lookup("box").unwrap().to_subpaths().unwrap();
    assert_eq!(p, again);
}
