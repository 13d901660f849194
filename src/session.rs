//! Mock session: a random token plus a `{ "email": ... }` record, both kept in
//! the key-value store. Nothing is ever validated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PortalConfig;
use crate::prng::Prng;
use crate::storage::{KeyValueStore, StorageError};

const UNKNOWN_EMAIL: &str = "(unknown)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

/// `<prefix><11 base-36 chars>_<epoch ms>`.
pub fn mint_token(prefix: &str, rng: &mut Prng, now_ms: u64) -> String {
    format!("{prefix}{}_{now_ms}", rng.base36(11))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Email or password was blank; nothing was stored.
    MissingCredentials,
    LoggedIn { token: String },
    StorageFailed(StorageError),
}

/// Write token and user record. The two writes are not atomic; a failure on
/// the second leaves the token behind.
pub fn store_session(
    store: &dyn KeyValueStore,
    cfg: &PortalConfig,
    token: &str,
    email: &str,
) -> Result<(), StorageError> {
    let user = SessionUser {
        email: email.to_string(),
    };
    let raw = serde_json::to_string(&user).unwrap_or_default();
    store.set(&cfg.token_key, token)?;
    store.set(&cfg.user_key, &raw)?;
    Ok(())
}

/// Remove both fields, attempting the second even if the first fails.
pub fn clear_session(store: &dyn KeyValueStore, cfg: &PortalConfig) -> Result<(), StorageError> {
    let token = store.remove(&cfg.token_key);
    let user = store.remove(&cfg.user_key);
    token.and(user)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSummary {
    LoggedOut,
    LoggedIn { email: String, token: String },
}

impl ProfileSummary {
    pub fn load(store: &dyn KeyValueStore, cfg: &PortalConfig) -> Self {
        let token = match store.get(&cfg.token_key) {
            Some(t) if !t.is_empty() => t,
            _ => return ProfileSummary::LoggedOut,
        };
        let email = store
            .get(&cfg.user_key)
            .and_then(|raw| stored_email(&raw))
            .unwrap_or_else(|| UNKNOWN_EMAIL.to_string());
        ProfileSummary::LoggedIn { email, token }
    }

    pub fn render(&self) -> String {
        match self {
            ProfileSummary::LoggedOut => "❌ No token found. Please login first.".to_string(),
            ProfileSummary::LoggedIn { email, token } => {
                format!("✅ Logged in as: {email}\n\nToken:\n{token}")
            }
        }
    }
}

/// The record's `email` as text: strings verbatim, any other JSON value as its
/// JSON form. `None` if the record is unreadable or has no `email`.
fn stored_email(raw: &str) -> Option<String> {
    let record: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("stored user record unreadable: {e}");
            return None;
        }
    };
    match record.get("email")? {
        Value::String(email) => Some(email.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn minted_token_shape() {
        let mut rng = Prng::new(7);
        let token = mint_token("demo_jwt_", &mut rng, 1_700_000_000_000);
        let rest = token.strip_prefix("demo_jwt_").unwrap();
        let (random, ms) = rest.split_once('_').unwrap();
        assert_eq!(random.len(), 11);
        assert_eq!(ms, "1700000000000");
    }

    #[test]
    fn stored_session_round_trips_into_summary() {
        let store = MemoryStore::new();
        let cfg = PortalConfig::default();
        store_session(&store, &cfg, "tok", "a@b.c").unwrap();
        assert_eq!(store.get("demo_user").as_deref(), Some(r#"{"email":"a@b.c"}"#));
        assert_eq!(
            ProfileSummary::load(&store, &cfg),
            ProfileSummary::LoggedIn {
                email: "a@b.c".into(),
                token: "tok".into()
            }
        );
    }

    #[test]
    fn token_without_user_record_shows_placeholder() {
        let store = MemoryStore::new();
        let cfg = PortalConfig::default();
        store.set("demo_token", "tok").unwrap();
        let summary = ProfileSummary::load(&store, &cfg);
        assert_eq!(summary.render(), "✅ Logged in as: (unknown)\n\nToken:\ntok");
    }

    #[test]
    fn non_string_email_is_shown_as_json() {
        let store = MemoryStore::new();
        let cfg = PortalConfig::default();
        store.set("demo_token", "tok").unwrap();
        for (record, shown) in [
            (r#"{"email":42}"#, "42"),
            (r#"{"email":null}"#, "null"),
            (r#"{"name":"x"}"#, "(unknown)"),
            ("not json", "(unknown)"),
        ] {
            store.set("demo_user", record).unwrap();
            assert_eq!(
                ProfileSummary::load(&store, &cfg),
                ProfileSummary::LoggedIn {
                    email: shown.into(),
                    token: "tok".into()
                },
                "record {record}"
            );
        }
    }

    #[test]
    fn empty_token_counts_as_logged_out() {
        let store = MemoryStore::new();
        let cfg = PortalConfig::default();
        store.set("demo_token", "").unwrap();
        store.set("demo_user", r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(ProfileSummary::load(&store, &cfg), ProfileSummary::LoggedOut);
    }

    #[test]
    fn clear_removes_both_fields() {
        let store = MemoryStore::new();
        let cfg = PortalConfig::default();
        store_session(&store, &cfg, "tok", "a@b.c").unwrap();
        clear_session(&store, &cfg).unwrap();
        assert!(store.is_empty());
    }
}
