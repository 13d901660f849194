use portal::{ClipboardCallback, ElementId, Page, PageError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::js::js_to_string;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn element(id: ElementId) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id.dom_id())
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically because
/// insecure contexts and older WebViews leave `navigator.clipboard` undefined.
fn clipboard_write_promise(
    window: &web_sys::Window,
    text: &str,
) -> Result<js_sys::Promise, PageError> {
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| PageError::ClipboardUnavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PageError::ClipboardUnavailable);
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(PageError::ClipboardUnavailable)?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| PageError::ClipboardRejected(js_to_string(&e)))?;
    promise.dyn_into::<js_sys::Promise>().map_err(|_| {
        PageError::ClipboardRejected("writeText did not return a promise".to_string())
    })
}

/// The live DOM of the current document.
pub(super) struct DomPage;

impl Page for DomPage {
    fn location_href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn location_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn has_element(&self, id: ElementId) -> bool {
        element(id).is_some()
    }

    fn element_text(&self, id: ElementId) -> Option<String> {
        element(id).map(|el| el.text_content().unwrap_or_default())
    }

    fn set_element_text(&self, id: ElementId, text: &str) -> bool {
        match element(id) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn input_value(&self, id: ElementId) -> Option<String> {
        element(id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn navigate(&self, href: &str) {
        let Some(w) = web_sys::window() else {
            return;
        };
        if let Err(e) = w.location().set_href(href) {
            tracing::warn!("navigation to {href} failed: {}", js_to_string(&e));
        }
    }

    fn open_window(&self, url: &str) -> Result<(), PageError> {
        let w = web_sys::window().ok_or(PageError::NoWindow)?;
        // With `noopener` the returned handle is always null; only a throw
        // counts as failure.
        w.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| PageError::OpenFailed(js_to_string(&e)))
    }

    fn write_clipboard(&self, text: &str, done: ClipboardCallback) {
        let Some(w) = web_sys::window() else {
            done(Err(PageError::NoWindow));
            return;
        };
        match clipboard_write_promise(&w, text) {
            Ok(promise) => spawn_local(async move {
                let res = JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| PageError::ClipboardRejected(js_to_string(&e)));
                done(res);
            }),
            Err(e) => done(Err(e)),
        }
    }
}
