use std::rc::Rc;

use leptos::prelude::*;
use portal::{PortalConfig, PortalController, SystemClock};
use wasm_bindgen::prelude::*;

use crate::ui_model::PortalRoute;
use shell::App;

mod bridge;
mod console;
mod js;
mod page;
mod shell;
mod storage;

/// Global the host may set before load to override `PortalConfig` fields.
const CONFIG_GLOBAL: &str = "PortalConfig";
/// Global the host calls to push messages into the page.
const INBOUND_GLOBAL: &str = "onNativeMessage";

pub fn start() {
    console_error_panic_hook::set_once();
    console::init_tracing();

    let Some(window) = web_sys::window() else {
        tracing::error!("no window; portal not started");
        return;
    };

    let config = load_config(&window);
    let native = bridge::detect_native_bridge(&window);
    tracing::debug!(?native, "native bridge snapshot");

    let portal = Rc::new(PortalController::new(
        native,
        Rc::new(page::DomPage),
        Rc::new(storage::LocalStore),
        Rc::new(SystemClock),
        config,
    ));

    let route = PortalRoute::from_path(&window.location().pathname().unwrap_or_default());
    let app_portal = Rc::clone(&portal);
    mount_to_body(move || view! { <App portal=app_portal route=route /> });

    expose_inbound_handler(&window, &portal);
    portal.announce();
    if route == PortalRoute::Profile {
        portal.render_profile();
    }
}

fn load_config(window: &web_sys::Window) -> PortalConfig {
    let Ok(raw) = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return PortalConfig::default();
    };
    if raw.is_undefined() || raw.is_null() {
        return PortalConfig::default();
    }
    let json = js_sys::JSON::stringify(&raw)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    match PortalConfig::from_json(&json) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("ignoring window.{CONFIG_GLOBAL}: {e}");
            PortalConfig::default()
        }
    }
}

/// Install `window.onNativeMessage(type, payload)` for the host.
fn expose_inbound_handler(window: &web_sys::Window, portal: &PortalController) {
    let Some(handler) = portal.inbound_handler() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |kind: JsValue, payload: JsValue| {
        let kind = js::js_to_string(&kind);
        let payload = js::js_to_json(&payload);
        handler(&kind, &payload);
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    if js_sys::Reflect::set(window, &JsValue::from_str(INBOUND_GLOBAL), cb.as_ref()).is_err() {
        tracing::warn!("could not install window.{INBOUND_GLOBAL}");
    }
    cb.forget();
}
