//! Shared helpers for latch-credential integration tests

#![allow(dead_code)]

use std::sync::Arc;

use latch_credential::testing::{FakeHasher, ManualClock};
use latch_credential::{Argon2Config, Argon2Hasher, CredentialService};

pub const PW: &str = "7PaeT/A#4k8&7G/TpEuu1rg";
pub const PW_MIN: &str = "T/A#4k";
pub const PW_SHORT: &str = "T/A#";
pub const PW_EMPTY: &str = "";

pub const EXPIRY: i64 = 1_646_893_361_146;
pub const NOW: u64 = 1_700_000_000_000;

/// Install a test subscriber once; later calls are no-ops
pub fn init_logging() {
    let _ = latch_log::try_init(latch_log::Config::test());
}

/// Service over a fake hasher and a manual clock set to [`NOW`]
pub fn fake_service() -> (CredentialService, Arc<FakeHasher>, Arc<ManualClock>) {
    init_logging();
    let hasher = Arc::new(FakeHasher::new());
    let clock = Arc::new(ManualClock::new(NOW));
    let service = CredentialService::builder()
        .hasher(hasher.clone())
        .clock(clock.clone())
        .build();
    (service, hasher, clock)
}

/// Argon2id service with a small memory cost so tests stay fast
pub fn argon2_service() -> CredentialService {
    init_logging();
    CredentialService::builder()
        .hasher(Arc::new(Argon2Hasher::new(Argon2Config {
            memory_kib: 256,
            parallelism: 1,
        })))
        .build()
}
