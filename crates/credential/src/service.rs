//! Credential service - creation and verification with injected collaborators
//!
//! [`CredentialService`] owns the two things a [`Credential`] needs from the
//! outside world: a [`SecretHasher`] and a [`Clock`]. The convenience methods
//! on `Credential` itself use [`CredentialService::default`] (Argon2id and the
//! system clock).

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::CredentialConfig;
use crate::core::{
    CreateOptions, Credential, CredentialError, CredentialRecord, CredentialResult,
    ValidatedOptions,
};
use crate::hashing::{Argon2Hasher, SecretHasher};
use crate::utils::{Clock, SystemClock};

/// Creates, restores and verifies credentials
///
/// Cheap to clone; clones share the hasher and clock.
#[derive(Debug, Clone)]
pub struct CredentialService {
    hasher: Arc<dyn SecretHasher>,
    clock: Arc<dyn Clock>,
    defaults: CreateOptions,
}

impl Default for CredentialService {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CredentialService {
    /// Create builder for constructing a service instance
    ///
    /// # Examples
    ///
    /// ```
    /// use latch_credential::{Argon2Config, Argon2Hasher, CredentialService, SystemClock};
    /// use std::sync::Arc;
    ///
    /// let service = CredentialService::builder()
    ///     .hasher(Arc::new(Argon2Hasher::new(Argon2Config::default())))
    ///     .clock(Arc::new(SystemClock))
    ///     .build();
    /// assert_eq!(service.options().cost, 10);
    /// ```
    pub fn builder() -> CredentialServiceBuilder {
        CredentialServiceBuilder::new()
    }

    /// Argon2id service with defaults taken from `config`
    pub fn from_config(config: &CredentialConfig) -> Self {
        Self::builder()
            .hasher(Arc::new(Argon2Hasher::new(config.argon2.clone())))
            .defaults(config.create_options())
            .build()
    }

    /// Creation options seeded with this service's defaults
    pub fn options(&self) -> CreateOptions {
        self.defaults
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Hash `plain` and build a new credential
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. `min_length` must be positive ([`CredentialError::InvalidMinLength`])
    /// 2. `plain` must have at least `min_length` characters
    ///    ([`CredentialError::InvalidPlain`])
    /// 3. `expires_at`, if set, must not be negative
    ///    ([`CredentialError::InvalidExpiry`])
    /// 4. `cost` must be positive and fit in `u32` ([`CredentialError::InvalidCost`])
    ///
    /// A hasher failure becomes [`CredentialError::HashingFailure`]. The
    /// creation time is stamped from the service clock.
    #[tracing::instrument(
        skip(self, plain, options),
        fields(min_length = options.min_length, cost = options.cost, has_expiry = options.expires_at.is_some())
    )]
    pub async fn create(&self, plain: &str, options: CreateOptions) -> CredentialResult<Credential> {
        let ValidatedOptions { expires_at, cost } = options.validate(plain)?;

        let digest = self.hasher.hash(plain, cost).await.map_err(|e| {
            warn!(error = %e, "Hasher failed to hash secret");
            CredentialError::HashingFailure { operation: "hash" }
        })?;

        let now = self.clock.now_millis();
        let created_at = i64::try_from(now).map_err(|_| CredentialError::InvalidCreatedAt {
            created_at: i64::MAX,
            reason: format!("clock reading {now} exceeds the representable range"),
        })?;

        let record = CredentialRecord {
            digest,
            created_at,
            expires_at: expires_at.map(|at| at as i64),
        };

        let credential = Credential::from_record(record, self.clock.as_ref())?;
        debug!(created_at = credential.created_at(), "Credential created");
        Ok(credential)
    }

    /// Rebuild a stored credential, checked against the service clock
    pub fn restore(&self, record: CredentialRecord) -> CredentialResult<Credential> {
        Credential::from_record(record, self.clock.as_ref())
    }

    /// Check `plain` against `credential`
    ///
    /// An empty `plain` is [`CredentialError::InvalidPlain`]. An expired
    /// credential returns `Ok(false)` without consulting the hasher. Otherwise
    /// the hasher's answer is returned; a hasher failure becomes
    /// [`CredentialError::HashingFailure`].
    #[tracing::instrument(skip(self, credential, plain))]
    pub async fn verify(&self, credential: &Credential, plain: &str) -> CredentialResult<bool> {
        if plain.is_empty() {
            return Err(CredentialError::invalid_plain("must not be empty"));
        }

        if self.is_expired(credential) {
            debug!(expires_at = credential.expires_at(), "Credential expired");
            return Ok(false);
        }

        let matched = self
            .hasher
            .compare(plain, credential.digest())
            .await
            .map_err(|e| {
                warn!(error = %e, "Hasher failed to compare secret");
                CredentialError::HashingFailure {
                    operation: "compare",
                }
            })?;

        debug!(matched, "Credential verified");
        Ok(matched)
    }

    /// Whether `credential` is expired according to the service clock
    pub fn is_expired(&self, credential: &Credential) -> bool {
        credential.is_expired_at(self.clock.now_millis())
    }
}

/// Builder for [`CredentialService`]
///
/// Unset collaborators fall back to [`Argon2Hasher::default`] and
/// [`SystemClock`].
#[derive(Debug, Default)]
pub struct CredentialServiceBuilder {
    hasher: Option<Arc<dyn SecretHasher>>,
    clock: Option<Arc<dyn Clock>>,
    defaults: Option<CreateOptions>,
}

impl CredentialServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hasher(mut self, hasher: Arc<dyn SecretHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Options returned by [`CredentialService::options`]
    pub fn defaults(mut self, defaults: CreateOptions) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn build(self) -> CredentialService {
        CredentialService {
            hasher: self
                .hasher
                .unwrap_or_else(|| Arc::new(Argon2Hasher::default())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            defaults: self.defaults.unwrap_or_default(),
        }
    }
}
