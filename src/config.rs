use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid portal config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Keys, navigation targets and fixed strings used by the portal.
///
/// Hosts may override any subset of fields with a JSON object; anything left
/// out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub token_key: String,
    pub user_key: String,
    pub profile_href: String,
    pub landing_href: String,
    pub toast_message: String,
    pub token_prefix: String,
    pub missing_token_placeholder: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            token_key: "demo_token".to_string(),
            user_key: "demo_user".to_string(),
            profile_href: "./profile.html".to_string(),
            landing_href: "./index.html".to_string(),
            toast_message: "Hello from Web Portal 👋".to_string(),
            token_prefix: "demo_jwt_".to_string(),
            missing_token_placeholder: "demo-token-not-set".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = PortalConfig::from_json(r#"{"token_key":"alt_token"}"#).unwrap();
        assert_eq!(cfg.token_key, "alt_token");
        assert_eq!(cfg.user_key, "demo_user");
        assert_eq!(cfg.profile_href, "./profile.html");
        assert_eq!(cfg.landing_href, "./index.html");
    }

    #[test]
    fn rejects_malformed_override() {
        let err = PortalConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid portal config"));
    }
}
