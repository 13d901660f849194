use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Roughly `String(value)`.
pub(super) fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    if let Some(b) = value.as_bool() {
        return b.to_string();
    }
    if let Some(n) = value.as_f64() {
        return n.to_string();
    }
    match value.dyn_ref::<js_sys::Object>() {
        Some(obj) => String::from(obj.to_string()),
        None => format!("{value:?}"),
    }
}

/// Convert an arbitrary JS value through `JSON.stringify`. Values JSON cannot
/// represent (undefined, functions, cycles) become `null`.
pub(super) fn js_to_json(value: &JsValue) -> serde_json::Value {
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(serde_json::Value::Null)
}
