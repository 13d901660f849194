//! Output panel log.
//!
//! Every message is mirrored to `tracing` (the browser console in the web
//! shell) and prepended to the `output` element with an ISO timestamp, so the
//! newest line is always on top. The panel grows without bound.

use std::rc::Rc;

use crate::clock::{iso_timestamp, Clock};
use crate::page::{ElementId, Page};

pub trait LogSink {
    fn write(&self, msg: &str);
}

pub fn format_log_line(timestamp: &str, msg: &str) -> String {
    format!("[{timestamp}] {msg}\n\n")
}

/// Log sink backed by the page's output panel.
pub struct PanelLog {
    page: Rc<dyn Page>,
    clock: Rc<dyn Clock>,
}

impl PanelLog {
    pub fn new(page: Rc<dyn Page>, clock: Rc<dyn Clock>) -> Self {
        Self { page, clock }
    }
}

impl LogSink for PanelLog {
    fn write(&self, msg: &str) {
        tracing::info!(target: "portal", "[Portal] {msg}");
        let line = format_log_line(&iso_timestamp(self.clock.now_ms()), msg);
        self.page.prepend_text(ElementId::Output, &line);
    }
}

/// Prepend-only text buffer, the in-memory stand-in for the output panel.
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LogBuffer {
    text: String,
}

#[cfg(test)]
impl LogBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn prepend(&mut self, line: &str) {
        self.text.insert_str(0, line);
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Messages without their timestamp prefix, newest first.
    pub(crate) fn messages(&self) -> Vec<&str> {
        self.text
            .split("\n\n")
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once("] ") {
                Some((stamp, msg)) if stamp.starts_with('[') => msg,
                _ => entry,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_line_comes_first() {
        let mut buf = LogBuffer::new();
        buf.prepend(&format_log_line("2024-01-01T00:00:00.000Z", "first"));
        buf.prepend(&format_log_line("2024-01-01T00:00:01.000Z", "second"));
        assert_eq!(buf.messages(), vec!["second", "first"]);
        assert!(buf.text().starts_with("[2024-01-01T00:00:01.000Z] second\n\n"));
    }

    #[test]
    fn line_format() {
        assert_eq!(
            format_log_line("1970-01-01T00:00:00.000Z", "hi"),
            "[1970-01-01T00:00:00.000Z] hi\n\n"
        );
    }
}
