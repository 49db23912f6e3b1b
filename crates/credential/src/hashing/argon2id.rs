//! Argon2id hasher
//!
//! Digests are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so
//! verification reads its parameters back from the digest and keeps working
//! after the configured memory or parallelism changes.

use std::time::Instant;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use zeroize::Zeroizing;

use super::SecretHasher;
use crate::config::Argon2Config;
use crate::core::HashError;

/// [`SecretHasher`] backed by Argon2id
///
/// `cost` maps to the Argon2 time cost (number of passes). Memory and lanes
/// come from [`Argon2Config`]. Inside a tokio runtime the work runs on the
/// blocking pool; without one it runs inline on the polling thread.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    config: Argon2Config,
}

impl Argon2Hasher {
    pub fn new(config: Argon2Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Argon2Config {
        &self.config
    }
}

#[async_trait]
impl SecretHasher for Argon2Hasher {
    async fn hash(&self, plain: &str, cost: u32) -> Result<String, HashError> {
        let plain = Zeroizing::new(plain.to_owned());
        let config = self.config.clone();

        run_blocking(move || hash_blocking(&plain, cost, &config)).await
    }

    async fn compare(&self, plain: &str, digest: &str) -> Result<bool, HashError> {
        let plain = Zeroizing::new(plain.to_owned());
        let digest = digest.to_owned();

        run_blocking(move || compare_blocking(&plain, &digest)).await
    }
}

async fn run_blocking<T, F>(work: F) -> Result<T, HashError>
where
    F: FnOnce() -> Result<T, HashError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle
            .spawn_blocking(work)
            .await
            .map_err(|e| HashError::with_source("argon2 worker did not complete", e))?,
        Err(_) => work(),
    }
}

fn hash_blocking(plain: &str, cost: u32, config: &Argon2Config) -> Result<String, HashError> {
    let started = Instant::now();

    let params = Params::new(config.memory_kib, cost, config.parallelism, None).map_err(|e| {
        HashError::with_source(
            format!(
                "invalid argon2 parameters (m={}, t={cost}, p={})",
                config.memory_kib, config.parallelism
            ),
            e,
        )
    })?;

    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| HashError::with_source("argon2 hashing failed", e))?
        .to_string();

    tracing::trace!(
        cost,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Argon2 hash computed"
    );

    Ok(digest)
}

fn compare_blocking(plain: &str, digest: &str) -> Result<bool, HashError> {
    let parsed =
        PasswordHash::new(digest).map_err(|e| HashError::with_source("malformed digest", e))?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::with_source("argon2 verification failed", e)),
    }
}
