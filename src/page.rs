//! Presentation port: everything the controller does to the page.
//!
//! Missing elements are never an error. Writers report whether the element
//! existed and readers return `None`, so a feature whose element is absent
//! quietly does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    CurrentUrl,
    BridgeStatus,
    Output,
    UrlInput,
    Email,
    Password,
    TokenBox,
}

impl ElementId {
    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::CurrentUrl => "currentUrl",
            ElementId::BridgeStatus => "bridgeStatus",
            ElementId::Output => "output",
            ElementId::UrlInput => "urlInput",
            ElementId::Email => "email",
            ElementId::Password => "password",
            ElementId::TokenBox => "tokenBox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no browser window")]
    NoWindow,
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("window.open failed: {0}")]
    OpenFailed(String),
}

/// Completion for [`Page::write_clipboard`]. Called exactly once, possibly
/// after the initiating call has returned.
pub type ClipboardCallback = Box<dyn FnOnce(Result<(), PageError>)>;

pub trait Page {
    fn location_href(&self) -> String;
    fn location_path(&self) -> String;

    fn has_element(&self, id: ElementId) -> bool;
    fn element_text(&self, id: ElementId) -> Option<String>;
    /// Returns `false` when the element does not exist.
    fn set_element_text(&self, id: ElementId, text: &str) -> bool;
    /// Current value of an `<input>`, untrimmed.
    fn input_value(&self, id: ElementId) -> Option<String>;

    /// Blocking modal alert.
    fn alert(&self, message: &str);
    fn navigate(&self, href: &str);
    /// Open `url` in a new tab without giving it a handle back to this page.
    fn open_window(&self, url: &str) -> Result<(), PageError>;
    fn write_clipboard(&self, text: &str, done: ClipboardCallback);

    /// Prepend `text` to an element's current text.
    fn prepend_text(&self, id: ElementId, text: &str) -> bool {
        let Some(current) = self.element_text(id) else {
            return false;
        };
        self.set_element_text(id, &format!("{text}{current}"))
    }
}
