//! Optional native capability handle.
//!
//! A WebView container may expose any subset of five methods. Each one is an
//! optional field on [`NativeBridge`], so "does the host implement this?" is a
//! plain `Option` check instead of a runtime probe.

use std::fmt;

/// Textual form of an error raised by the host while running a bridge method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct BridgeError(pub String);

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Result of one wrapped bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<T> {
    /// No bridge, or the bridge lacks this method. The caller runs its fallback.
    Unavailable,
    /// The host raised an error.
    Failed(BridgeError),
    Completed(T),
}

impl<T> CallOutcome<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CallOutcome::Unavailable)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            CallOutcome::Unavailable => CallOutcome::Unavailable,
            CallOutcome::Failed(e) => CallOutcome::Failed(e),
            CallOutcome::Completed(v) => CallOutcome::Completed(f(v)),
        }
    }
}

impl<T> From<BridgeResult<T>> for CallOutcome<T> {
    fn from(res: BridgeResult<T>) -> Self {
        match res {
            Ok(v) => CallOutcome::Completed(v),
            Err(e) => CallOutcome::Failed(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeMethod {
    GetDeviceInfo,
    CopyToClipboard,
    LogEvent,
    ShowToast,
    OpenExternalUrl,
}

impl BridgeMethod {
    /// Member name on the host object.
    pub fn js_name(self) -> &'static str {
        match self {
            BridgeMethod::GetDeviceInfo => "getDeviceInfo",
            BridgeMethod::CopyToClipboard => "copyToClipboard",
            BridgeMethod::LogEvent => "logEvent",
            BridgeMethod::ShowToast => "showToast",
            BridgeMethod::OpenExternalUrl => "openExternalUrl",
        }
    }

    pub fn all() -> &'static [BridgeMethod] {
        &[
            BridgeMethod::GetDeviceInfo,
            BridgeMethod::CopyToClipboard,
            BridgeMethod::LogEvent,
            BridgeMethod::ShowToast,
            BridgeMethod::OpenExternalUrl,
        ]
    }
}

impl fmt::Display for BridgeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.js_name())
    }
}

type QueryFn = Box<dyn Fn() -> BridgeResult<String>>;
type SendFn = Box<dyn Fn(&str) -> BridgeResult<()>>;

/// Host-provided capabilities. Build with [`NativeBridge::new`] and the
/// `with_*` methods; any method left unset is reported as unavailable.
#[derive(Default)]
pub struct NativeBridge {
    get_device_info: Option<QueryFn>,
    copy_to_clipboard: Option<SendFn>,
    log_event: Option<SendFn>,
    show_toast: Option<SendFn>,
    open_external_url: Option<SendFn>,
}

impl NativeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device_info(mut self, f: impl Fn() -> BridgeResult<String> + 'static) -> Self {
        self.get_device_info = Some(Box::new(f));
        self
    }

    pub fn with_copy_to_clipboard(
        mut self,
        f: impl Fn(&str) -> BridgeResult<()> + 'static,
    ) -> Self {
        self.copy_to_clipboard = Some(Box::new(f));
        self
    }

    pub fn with_log_event(mut self, f: impl Fn(&str) -> BridgeResult<()> + 'static) -> Self {
        self.log_event = Some(Box::new(f));
        self
    }

    pub fn with_show_toast(mut self, f: impl Fn(&str) -> BridgeResult<()> + 'static) -> Self {
        self.show_toast = Some(Box::new(f));
        self
    }

    pub fn with_open_external_url(
        mut self,
        f: impl Fn(&str) -> BridgeResult<()> + 'static,
    ) -> Self {
        self.open_external_url = Some(Box::new(f));
        self
    }

    /// Install a string-argument method by kind. `GetDeviceInfo` takes no
    /// argument and is ignored here; use [`NativeBridge::with_device_info`].
    pub fn with_sender(
        self,
        method: BridgeMethod,
        f: impl Fn(&str) -> BridgeResult<()> + 'static,
    ) -> Self {
        match method {
            BridgeMethod::GetDeviceInfo => self,
            BridgeMethod::CopyToClipboard => self.with_copy_to_clipboard(f),
            BridgeMethod::LogEvent => self.with_log_event(f),
            BridgeMethod::ShowToast => self.with_show_toast(f),
            BridgeMethod::OpenExternalUrl => self.with_open_external_url(f),
        }
    }

    pub fn supports(&self, method: BridgeMethod) -> bool {
        match method {
            BridgeMethod::GetDeviceInfo => self.get_device_info.is_some(),
            BridgeMethod::CopyToClipboard => self.copy_to_clipboard.is_some(),
            BridgeMethod::LogEvent => self.log_event.is_some(),
            BridgeMethod::ShowToast => self.show_toast.is_some(),
            BridgeMethod::OpenExternalUrl => self.open_external_url.is_some(),
        }
    }

    pub fn device_info(&self) -> CallOutcome<String> {
        match &self.get_device_info {
            Some(f) => f().into(),
            None => CallOutcome::Unavailable,
        }
    }

    /// Call one of the string-argument methods.
    pub fn send(&self, method: BridgeMethod, arg: &str) -> CallOutcome<()> {
        let slot = match method {
            BridgeMethod::GetDeviceInfo => return self.device_info().map(|_| ()),
            BridgeMethod::CopyToClipboard => &self.copy_to_clipboard,
            BridgeMethod::LogEvent => &self.log_event,
            BridgeMethod::ShowToast => &self.show_toast,
            BridgeMethod::OpenExternalUrl => &self.open_external_url,
        };
        match slot {
            Some(f) => f(arg).into(),
            None => CallOutcome::Unavailable,
        }
    }
}

impl fmt::Debug for NativeBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = BridgeMethod::all()
            .iter()
            .filter(|m| self.supports(**m))
            .map(|m| m.js_name())
            .collect();
        f.debug_struct("NativeBridge")
            .field("supported", &supported)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_bridge_reports_every_method_unavailable() {
        let bridge = NativeBridge::new();
        for m in BridgeMethod::all() {
            assert!(!bridge.supports(*m));
        }
        assert!(bridge.device_info().is_unavailable());
        assert!(bridge.send(BridgeMethod::ShowToast, "hi").is_unavailable());
    }

    #[test]
    fn send_routes_to_the_named_method() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_toast = Rc::clone(&seen);
        let bridge = NativeBridge::new().with_show_toast(move |msg| {
            seen_toast.borrow_mut().push(msg.to_string());
            Ok(())
        });

        assert!(bridge.supports(BridgeMethod::ShowToast));
        assert!(!bridge.supports(BridgeMethod::LogEvent));
        assert_eq!(
            bridge.send(BridgeMethod::ShowToast, "hello"),
            CallOutcome::Completed(())
        );
        assert!(bridge.send(BridgeMethod::LogEvent, "{}").is_unavailable());
        assert_eq!(seen.borrow().as_slice(), ["hello".to_string()]);
    }

    #[test]
    fn raised_errors_become_failed_outcomes() {
        let bridge = NativeBridge::new()
            .with_device_info(|| Err(BridgeError::new("Error: device busy")));
        assert_eq!(
            bridge.device_info(),
            CallOutcome::Failed(BridgeError::new("Error: device busy"))
        );
    }

    #[test]
    fn method_names_match_host_members() {
        assert_eq!(BridgeMethod::CopyToClipboard.to_string(), "copyToClipboard()");
        assert_eq!(BridgeMethod::OpenExternalUrl.js_name(), "openExternalUrl");
        let bridge = NativeBridge::new().with_log_event(|_| Ok(()));
        assert_eq!(
            format!("{bridge:?}"),
            "NativeBridge { supported: [\"logEvent\"] }"
        );
    }
}
