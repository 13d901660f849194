use portal::{BridgeError, BridgeMethod, NativeBridge};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js::js_to_string;

const BRIDGE_GLOBAL: &str = "NativeBridge";

/// Snapshot `window.NativeBridge` and whichever of its members are functions.
/// Runs once at load; a bridge injected afterwards is not picked up.
pub(super) fn detect_native_bridge(window: &web_sys::Window) -> Option<NativeBridge> {
    let handle = js_sys::Reflect::get(window, &JsValue::from_str(BRIDGE_GLOBAL)).ok()?;
    if handle.is_undefined() || handle.is_null() {
        return None;
    }

    let mut bridge = NativeBridge::new();
    for &method in BridgeMethod::all() {
        let Some(func) = js_sys::Reflect::get(&handle, &JsValue::from_str(method.js_name()))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        else {
            continue;
        };

        let this = handle.clone();
        bridge = match method {
            BridgeMethod::GetDeviceInfo => bridge.with_device_info(move || {
                func.call0(&this)
                    .map(|v| js_to_string(&v))
                    .map_err(|e| BridgeError::new(js_to_string(&e)))
            }),
            _ => bridge.with_sender(method, move |arg| {
                func.call1(&this, &JsValue::from_str(arg))
                    .map(|_| ())
                    .map_err(|e| BridgeError::new(js_to_string(&e)))
            }),
        };
    }
    Some(bridge)
}
