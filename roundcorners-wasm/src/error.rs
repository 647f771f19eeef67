use crate::interop::{new_obj, set_kv};
use roundcorners::RoundError;
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn not_found(id: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_str(id));
    err("not_found", format!("no path with id {:?}", id), Some(d.into()))
}

/// Stable error code for each core error.
pub fn code_of(e: &RoundError) -> &'static str {
    match e {
        RoundError::NoSelection => "no_selection",
        RoundError::InvalidSelection(_) | RoundError::OutOfOrder { .. } => "invalid_selection",
        RoundError::InvalidRadius(_) => "invalid_radius",
        RoundError::UnknownMethod(_) => "unknown_method",
        RoundError::PathNotFound(_) => "not_found",
        RoundError::PathSyntax { .. } | RoundError::Json(_) => "path_syntax",
        RoundError::UnsupportedCommand(_) => "unsupported",
        RoundError::LimitExceeded(_) => "limit",
        RoundError::InvalidTransform(_) => "invalid_transform",
        RoundError::NonFinite(_) => "non_finite",
        _ => "internal",
    }
}

pub fn from_round(e: &RoundError) -> JsValue {
    let data = match e {
        RoundError::PathNotFound(id) => return not_found(id),
        RoundError::PathSyntax { pos, .. } => {
            let d = new_obj(); set_kv(&d, "pos", &JsValue::from_f64(*pos as f64));
            Some(d.into())
        }
        RoundError::OutOfOrder { subpath, index, last } => {
            let d = new_obj();
            set_kv(&d, "subpath", &JsValue::from_f64(*subpath as f64));
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            set_kv(&d, "last", &JsValue::from_f64(*last as f64));
            Some(d.into())
        }
        RoundError::UnsupportedCommand(c) => {
            let d = new_obj(); set_kv(&d, "command", &JsValue::from_str(&c.to_string()));
            Some(d.into())
        }
        _ => None,
    };
    err(code_of(e), e.to_string(), data)
}
