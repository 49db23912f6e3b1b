//! Test doubles for [`SecretHasher`] and [`Clock`]
//!
//! Available under `cfg(test)` and the `test-util` feature.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::HashError;
use crate::hashing::SecretHasher;
use crate::utils::Clock;

const FAKE_PREFIX: &str = "$fake$c=";

/// Deterministic hasher with switchable failures and call counters
///
/// Digests look like `$fake$c=<cost>$<reversed plaintext>`. They are not
/// one-way; never use this outside tests.
#[derive(Debug, Default)]
pub struct FakeHasher {
    fail_hash: AtomicBool,
    fail_compare: AtomicBool,
    hash_calls: AtomicUsize,
    compare_calls: AtomicUsize,
    last_cost: Mutex<Option<u32>>,
}

impl FakeHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `hash` call fail
    pub fn fail_hash(&self, fail: bool) {
        self.fail_hash.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `compare` call fail
    pub fn fail_compare(&self, fail: bool) {
        self.fail_compare.store(fail, Ordering::SeqCst);
    }

    pub fn hash_calls(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }

    pub fn compare_calls(&self) -> usize {
        self.compare_calls.load(Ordering::SeqCst)
    }

    pub fn last_cost(&self) -> Option<u32> {
        *self
            .last_cost
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// The digest this hasher produces for `plain` at `cost`
    pub fn digest_for(plain: &str, cost: u32) -> String {
        format!("{FAKE_PREFIX}{cost}${}", plain.chars().rev().collect::<String>())
    }
}

#[async_trait]
impl SecretHasher for FakeHasher {
    async fn hash(&self, plain: &str, cost: u32) -> Result<String, HashError> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_cost
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(cost);

        if self.fail_hash.load(Ordering::SeqCst) {
            return Err(HashError::new("fake hash failure"));
        }
        Ok(Self::digest_for(plain, cost))
    }

    async fn compare(&self, plain: &str, digest: &str) -> Result<bool, HashError> {
        self.compare_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_compare.load(Ordering::SeqCst) {
            return Err(HashError::new("fake compare failure"));
        }

        let cost = digest
            .strip_prefix(FAKE_PREFIX)
            .and_then(|rest| rest.split_once('$'))
            .and_then(|(cost, _)| cost.parse::<u32>().ok())
            .ok_or_else(|| HashError::new("not a fake digest"))?;

        Ok(Self::digest_for(plain, cost) == digest)
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(now_millis: u64) -> Self {
        Self {
            now: AtomicU64::new(now_millis),
        }
    }

    pub fn set(&self, now_millis: u64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
