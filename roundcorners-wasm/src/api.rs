use crate::error;
use crate::Document;
use roundcorners::selection::parse_keys;
use roundcorners::{round_corners, Method, MemoryStore, RoundOptions};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
impl Document {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Document {
        crate::Document::rs_new()
    }

    pub fn path_count(&self) -> u32 {
        self.store.len() as u32
    }

    pub fn add_path(&mut self, id: &str, d: &str) -> bool {
        self.store.insert(id, d).is_ok()
    }
    pub fn add_path_res(&mut self, id: &str, d: &str) -> JsValue {
        match self.store.insert(id, d) {
            Ok(()) => error::ok(JsValue::from_f64(self.store.len() as f64)),
            Err(e) => error::from_round(&e),
        }
    }

    /// Attach an SVG transform list to a path; an empty string removes it.
    pub fn set_transform_res(&mut self, id: &str, transform: &str) -> JsValue {
        match self.store.set_transform(id, transform) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_round(&e),
        }
    }

    pub fn get_path(&self, id: &str) -> Option<String> {
        self.store.get(id).map(|el| el.d.clone())
    }
    pub fn get_path_res(&self, id: &str) -> JsValue {
        match self.store.get(id) {
            Some(el) => match serde_wasm_bindgen::to_value(el) {
                Ok(v) => error::ok(v),
                Err(e) => error::err("internal", e.to_string(), None),
            },
            None => error::not_found(id),
        }
    }

    /// Nodes in one subpath, counting the closing duplicate of a closed one.
    pub fn node_count_res(&self, id: &str, subpath: u32) -> JsValue {
        let Some(el) = self.store.get(id) else { return error::not_found(id) };
        match roundcorners::svg::parse_path(&el.d) {
            Ok(p) => match p.subpaths.get(subpath as usize) {
                Some(sp) => error::ok(JsValue::from_f64(sp.len() as f64)),
                None => error::err("not_found", format!("path {:?} has no subpath {}", id, subpath), None),
            },
            Err(e) => error::from_round(&e),
        }
    }

    /// Round the selected corners (`pathId:subpath:node`) and return the
    /// batch diagnostics. Nothing is modified on error.
    pub fn round_corners_res(&mut self, selection: Vec<String>, radius: f64, method: &str) -> JsValue {
        if !radius.is_finite() {
            return error::non_finite("radius");
        }
        let method = match method.parse::<Method>() {
            Ok(m) => m,
            Err(e) => return error::from_round(&e),
        };
        let keys = match parse_keys(&selection) {
            Ok(k) => k,
            Err(e) => return error::from_round(&e),
        };
        // Work on a copy so a failing path leaves earlier ones untouched.
        let mut staged = self.store.clone();
        let diag = match round_corners(&mut staged, &keys, &RoundOptions::new(radius, method)) {
            Ok(d) => d,
            Err(e) => return error::from_round(&e),
        };
        self.store = staged;
        self.totals.merge(&diag);
        for w in diag.warnings() {
            web_sys::console::warn_1(&JsValue::from_str(&w));
        }
        match serde_wasm_bindgen::to_value(&diag) {
            Ok(v) => error::ok(v),
            Err(e) => error::err("internal", e.to_string(), None),
        }
    }

    /// Counters summed over every batch run on this document.
    pub fn totals_res(&self) -> JsValue {
        match serde_wasm_bindgen::to_value(&self.totals) {
            Ok(v) => error::ok(v),
            Err(e) => error::err("internal", e.to_string(), None),
        }
    }

    pub fn to_json(&self) -> String {
        self.store.to_json_value().to_string()
    }
    /// Replace the document with `{"paths": [{"id", "d", "transform"?}]}`.
    pub fn load_json_res(&mut self, json: &str) -> JsValue {
        let parsed = serde_json::from_str(json)
            .map_err(roundcorners::RoundError::from)
            .and_then(MemoryStore::from_json_value);
        match parsed {
            Ok(store) => {
                self.store = store;
                error::ok(JsValue::from_f64(self.store.len() as f64))
            }
            Err(e) => error::from_round(&e),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
