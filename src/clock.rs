use chrono::{DateTime, SecondsFormat};

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

// `std::time::SystemTime::now()` panics on `wasm32-unknown-unknown`; `web-time`
// reads `Date.now()` instead.
#[cfg(all(feature = "std", target_arch = "wasm32"))]
use web_time::{SystemTime, UNIX_EPOCH};

#[cfg(all(feature = "std", not(target_arch = "wasm32")))]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// `2024-03-01T12:00:00.000Z`, the shape `Date.prototype.toISOString` produces.
pub fn iso_timestamp(epoch_ms: u64) -> String {
    let ms = i64::try_from(epoch_ms).unwrap_or(i64::MAX);
    match DateTime::from_timestamp_millis(ms) {
        Some(t) => t.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => "1970-01-01T00:00:00.000Z".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamp_matches_browser_format() {
        assert_eq!(iso_timestamp(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(iso_timestamp(1_709_294_400_123), "2024-03-01T12:00:00.123Z");
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
