//! Portal page controller.
//!
//! Each capability demo follows the same shape: log the intent, call the
//! bridge method if the bridge (captured at construction) has it, otherwise run
//! the browser fallback, then log what happened. Nothing here returns an error
//! to the caller; every failure ends up as a line in the output panel.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::bridge::{BridgeError, BridgeMethod, CallOutcome, NativeBridge};
use crate::clock::{iso_timestamp, Clock};
use crate::config::PortalConfig;
use crate::event::PortalEvent;
use crate::log::{LogSink, PanelLog};
use crate::page::{ElementId, Page, PageError};
use crate::prng::Prng;
use crate::session::{self, LoginOutcome, ProfileSummary};
use crate::storage::KeyValueStore;

/// Receiver for messages pushed by the host: `(type, payload)`.
pub type InboundHandler = Rc<dyn Fn(&str, &Value)>;

pub struct PortalController {
    bridge: Option<NativeBridge>,
    page: Rc<dyn Page>,
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    log: Rc<dyn LogSink>,
    inbound: Option<InboundHandler>,
    rng: RefCell<Prng>,
    config: PortalConfig,
}

impl PortalController {
    /// `bridge` is a load-time snapshot; a bridge injected later is never seen.
    pub fn new(
        bridge: Option<NativeBridge>,
        page: Rc<dyn Page>,
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        config: PortalConfig,
    ) -> Self {
        let log: Rc<dyn LogSink> =
            Rc::new(PanelLog::new(Rc::clone(&page), Rc::clone(&clock)));
        let rng = RefCell::new(Prng::new(clock.now_ms() ^ 0xA5A5_5A5A_C3C3_3C3C));
        Self {
            bridge,
            page,
            store,
            clock,
            inbound: Some(message_logger(Rc::clone(&log))),
            log,
            rng,
            config,
        }
    }

    /// Replace (or remove, with `None`) the inbound message handler.
    pub fn with_inbound_handler(mut self, handler: Option<InboundHandler>) -> Self {
        self.inbound = handler;
        self
    }

    pub fn bridge_present(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn inbound_handler(&self) -> Option<InboundHandler> {
        self.inbound.clone()
    }

    fn write(&self, msg: &str) {
        self.log.write(msg);
    }

    fn call<T>(&self, f: impl FnOnce(&NativeBridge) -> CallOutcome<T>) -> CallOutcome<T> {
        match &self.bridge {
            Some(bridge) => f(bridge),
            None => CallOutcome::Unavailable,
        }
    }

    fn report_failure(&self, method: BridgeMethod, err: &BridgeError) {
        tracing::warn!(method = method.js_name(), "bridge call failed: {err}");
        self.write(&format!("Error calling {method}: {err}"));
    }

    /// Show the page URL and bridge status, then log the load line.
    pub fn announce(&self) {
        self.page
            .set_element_text(ElementId::CurrentUrl, &self.page.location_href());

        let status = if self.bridge_present() {
            "✅ NativeBridge detected (running inside WebView container)"
        } else {
            "ℹ️ NativeBridge not found (running in normal browser)"
        };
        self.page.set_element_text(ElementId::BridgeStatus, status);

        self.write(&format!(
            "Portal loaded. NativeBridge present={}",
            self.bridge_present()
        ));
    }

    pub fn get_device_info(&self) -> CallOutcome<String> {
        self.write("Requesting device info from native…");

        let outcome = self.call(NativeBridge::device_info);
        match &outcome {
            CallOutcome::Unavailable => self.write(&format!(
                "NativeBridge.{} not available. (Fallback: browser mode)",
                BridgeMethod::GetDeviceInfo
            )),
            CallOutcome::Failed(e) => self.report_failure(BridgeMethod::GetDeviceInfo, e),
            CallOutcome::Completed(info) => {
                self.write(&format!("Native returned device info: {info}"))
            }
        }
        outcome
    }

    /// Copy the stored token. Without the bridge this goes through the browser
    /// clipboard, whose result is logged whenever it arrives.
    pub fn copy_token(&self) -> CallOutcome<()> {
        let token = self
            .store
            .get(&self.config.token_key)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.config.missing_token_placeholder.clone());
        self.write(&format!("Requesting native clipboard copy… token={token}"));

        let outcome = self.call(|b| b.send(BridgeMethod::CopyToClipboard, &token));
        match &outcome {
            CallOutcome::Unavailable => {
                let log = Rc::clone(&self.log);
                self.page.write_clipboard(
                    &token,
                    Box::new(move |res: Result<(), PageError>| match res {
                        Ok(()) => log.write("Copied token via browser clipboard API ✅"),
                        Err(e) => {
                            tracing::debug!("browser clipboard failed: {e}");
                            log.write("Clipboard copy not available in this browser ❌");
                        }
                    }),
                );
            }
            CallOutcome::Failed(e) => self.report_failure(BridgeMethod::CopyToClipboard, e),
            CallOutcome::Completed(()) => self.write("Native clipboard copy requested ✅"),
        }
        outcome
    }

    pub fn log_event(&self) -> CallOutcome<()> {
        let event = PortalEvent::portal(
            self.page.location_path(),
            iso_timestamp(self.clock.now_ms()),
        );
        let raw = event.to_json();
        self.write(&format!(
            "Sending event to native {}: {raw}",
            BridgeMethod::LogEvent
        ));

        let outcome = self.call(|b| b.send(BridgeMethod::LogEvent, &raw));
        match &outcome {
            CallOutcome::Unavailable => self.write(&format!(
                "NativeBridge.{} not available. Logged in browser console only.",
                BridgeMethod::LogEvent
            )),
            CallOutcome::Failed(e) => self.report_failure(BridgeMethod::LogEvent, e),
            CallOutcome::Completed(()) => self.write("Native logEvent() called ✅"),
        }
        outcome
    }

    pub fn trigger_native_toast(&self) -> CallOutcome<()> {
        self.write("Requesting native toast…");

        let outcome =
            self.call(|b| b.send(BridgeMethod::ShowToast, &self.config.toast_message));
        match &outcome {
            CallOutcome::Unavailable => {
                self.page
                    .alert("Native toast requested (fallback alert in browser).");
                self.write(&format!(
                    "NativeBridge.{} not available. Used browser alert fallback.",
                    BridgeMethod::ShowToast
                ));
            }
            CallOutcome::Failed(e) => self.report_failure(BridgeMethod::ShowToast, e),
            CallOutcome::Completed(()) => self.write("Native toast requested ✅"),
        }
        outcome
    }

    /// Open the URL typed into `urlInput`. Returns `None` when the field is
    /// missing or blank; nothing is attempted then.
    pub fn open_url_from_input(&self) -> Option<CallOutcome<()>> {
        let url = self
            .page
            .input_value(ElementId::UrlInput)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if url.is_empty() {
            self.write("No URL provided.");
            return None;
        }

        self.write(&format!(
            "Requesting native {}: {url}",
            BridgeMethod::OpenExternalUrl
        ));

        let outcome = self.call(|b| b.send(BridgeMethod::OpenExternalUrl, &url));
        match &outcome {
            CallOutcome::Unavailable => {
                if let Err(e) = self.page.open_window(&url) {
                    tracing::warn!("window.open fallback failed: {e}");
                }
                self.write("Opened URL using browser window.open() fallback.");
            }
            CallOutcome::Failed(e) => self.report_failure(BridgeMethod::OpenExternalUrl, e),
            CallOutcome::Completed(()) => self.write("Native openExternalUrl() requested ✅"),
        }
        Some(outcome)
    }

    /// Feed a canned message through the inbound handler, as the host would.
    /// Returns whether a handler was there to receive it.
    ///
    /// This is the handler captured at construction, not whatever
    /// `window.onNativeMessage` holds now; a page that reassigns the global is
    /// bypassed.
    pub fn simulate_native_callback(&self) -> bool {
        self.write("Simulating native callback by directly calling window.onNativeMessage()…");
        match &self.inbound {
            Some(handler) => {
                handler("demo", &json!({ "hello": "from simulated native callback" }));
                true
            }
            None => {
                self.write("window.onNativeMessage() not defined yet.");
                false
            }
        }
    }

    /// Inbound entry point. Every message type is treated the same: logged.
    pub fn handle_native_message(&self, kind: &str, payload: &Value) {
        log_native_message(self.log.as_ref(), kind, payload);
    }

    pub fn login(&self) -> LoginOutcome {
        let field = |id| {
            self.page
                .input_value(id)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let email = field(ElementId::Email);
        let password = field(ElementId::Password);

        if email.is_empty() || password.is_empty() {
            self.page
                .alert("Enter email and password (anything works for this PoC).");
            return LoginOutcome::MissingCredentials;
        }

        let token = session::mint_token(
            &self.config.token_prefix,
            &mut self.rng.borrow_mut(),
            self.clock.now_ms(),
        );
        let stored = session::store_session(self.store.as_ref(), &self.config, &token, &email);
        if let Err(e) = stored {
            tracing::warn!("failed to persist session: {e}");
            self.write(&format!("Login failed: {e}"));
            return LoginOutcome::StorageFailed(e);
        }

        self.write("✅ Fake login succeeded. Token stored in localStorage.");
        self.page.navigate(&self.config.profile_href);
        LoginOutcome::LoggedIn { token }
    }

    pub fn logout(&self) {
        if let Err(e) = session::clear_session(self.store.as_ref(), &self.config) {
            tracing::warn!("failed to clear session: {e}");
        }
        self.page.alert("Logged out ✅");
        self.page.navigate(&self.config.landing_href);
    }

    /// Fill `tokenBox` with the session summary. `None` if the page has no
    /// token box.
    pub fn render_profile(&self) -> Option<ProfileSummary> {
        if !self.page.has_element(ElementId::TokenBox) {
            return None;
        }
        let summary = ProfileSummary::load(self.store.as_ref(), &self.config);
        self.page
            .set_element_text(ElementId::TokenBox, &summary.render());
        Some(summary)
    }
}

fn log_native_message(log: &dyn LogSink, kind: &str, payload: &Value) {
    log.write(&format!(
        "✅ Received message from native: type={kind}, payload={payload}"
    ));
}

fn message_logger(log: Rc<dyn LogSink>) -> InboundHandler {
    Rc::new(move |kind: &str, payload: &Value| {
        log_native_message(log.as_ref(), kind, payload)
    })
}
