//! Tracking number type.

use core::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

/// Prefix of every generated tracking number.
pub const TRACKING_PREFIX: &str = "TRACK-";

/// Last issued millisecond stamp, so numbers stay unique within a process
/// even when two forms are created in the same millisecond.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Tracking number assigned to an order form when it is created.
///
/// Format: `TRACK-<unix epoch milliseconds>`. Once assigned it never changes;
/// the type has no mutating methods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Generate a fresh tracking number from the current time.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_millis(next_stamp(chrono::Utc::now().timestamp_millis()))
    }

    /// Build a tracking number from an explicit millisecond stamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{TRACKING_PREFIX}{millis}"))
    }

    /// Returns the tracking number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `now`, or one past the last issued stamp if time has not advanced.
fn next_stamp(now: i64) -> i64 {
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(current) => last = current,
        }
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
