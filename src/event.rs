use serde::{Deserialize, Serialize};

/// Structured event handed to the bridge's `logEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalEvent {
    pub event_name: String,
    pub page: String,
    pub timestamp: String,
}

impl PortalEvent {
    pub fn portal(page: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            event_name: "portal_event".to_string(),
            page: page.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn to_json(&self) -> String {
        // Plain string fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys_in_order() {
        let ev = PortalEvent::portal("/index.html", "2024-01-01T00:00:00.000Z");
        assert_eq!(
            ev.to_json(),
            r#"{"eventName":"portal_event","page":"/index.html","timestamp":"2024-01-01T00:00:00.000Z"}"#
        );
    }
}
