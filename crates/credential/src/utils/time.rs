//! Time utilities for credentials

use std::fmt;

use chrono::Utc;

/// Source of the current wall-clock time
///
/// Injected into [`CredentialService`](crate::CredentialService) so creation
/// stamps and expiry checks can be driven deterministically in tests.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        unix_now_millis()
    }
}

/// Get current Unix timestamp in milliseconds
///
/// Clamped to zero if the system clock reads before the epoch.
#[must_use]
pub fn unix_now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
