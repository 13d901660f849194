//! # portal
//!
//! Page controller for a web portal that may run inside a WebView container.
//!
//! The container can inject a native bridge object before the page loads. Every
//! bridge call made through [`PortalController`] checks for the method first,
//! falls back to a browser-only behavior when it is missing, and reports the
//! result as a timestamped line in the on-page output panel.
//!
//! The controller also drives a mock login flow whose session (token + user
//! record) lives in a local key-value store. The token is random and never
//! validated; this is a demo, not an authentication system.
//!
//! ## Ports
//!
//! Nothing here touches a browser directly. The host supplies:
//!
//! - [`Page`]: DOM reads/writes, alerts, navigation, window.open, clipboard
//! - [`KeyValueStore`]: the persisted session fields
//! - [`Clock`]: epoch milliseconds for log timestamps and token minting
//!
//! The `portal_web` crate implements these over `web-sys`; tests use in-memory
//! fakes.
//!
//! ## Modules
//!
//! - [`bridge`]: the optional native capability handle and call outcomes
//! - [`controller`]: capability demos, inbound messages, mock auth
//! - [`log`]: output panel formatting and the log sink
//! - [`session`]: session record, token minting, profile summary

pub mod bridge;
pub mod clock;
pub mod config;
pub mod controller;
pub mod event;
pub mod log;
pub mod page;
pub mod prng;
pub mod session;
pub mod storage;

pub use bridge::{BridgeError, BridgeMethod, CallOutcome, NativeBridge};
pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use config::{ConfigError, PortalConfig};
pub use controller::{InboundHandler, PortalController};
pub use event::PortalEvent;
pub use log::{LogSink, PanelLog};
pub use page::{ClipboardCallback, ElementId, Page, PageError};
pub use session::{LoginOutcome, ProfileSummary, SessionUser};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

