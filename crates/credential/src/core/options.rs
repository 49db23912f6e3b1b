//! Options accepted by credential creation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{CredentialError, CredentialResult};

/// Minimum plaintext length when none is given
pub const DEFAULT_MIN_LENGTH: i64 = 6;

/// Hashing cost when none is given
pub const DEFAULT_COST: i64 = 10;

/// Parameters for [`Credential::create`](crate::Credential::create)
///
/// Values are taken as raw integers and validated on use, so a persisted or
/// user-supplied option set can be carried around before it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOptions {
    /// Expiry in milliseconds since the Unix epoch (`None` = never expires)
    pub expires_at: Option<i64>,

    /// Minimum plaintext length, in characters
    pub min_length: i64,

    /// Work factor passed to the hasher
    pub cost: i64,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            expires_at: None,
            min_length: DEFAULT_MIN_LENGTH,
            cost: DEFAULT_COST,
        }
    }
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire at the given Unix timestamp in milliseconds
    pub fn with_expiry(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Expire at the given instant
    pub fn expiring_at(self, at: DateTime<Utc>) -> Self {
        self.with_expiry(at.timestamp_millis())
    }

    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Check the options against `plain`.
    ///
    /// Order is fixed: minimum length, plaintext, expiry, cost. The first
    /// failing check decides the error.
    pub(crate) fn validate(&self, plain: &str) -> CredentialResult<ValidatedOptions> {
        let min_length = usize::try_from(self.min_length)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(CredentialError::InvalidMinLength {
                min_length: self.min_length,
            })?;

        let length = plain.chars().count();
        if length < min_length {
            return Err(CredentialError::invalid_plain(format!(
                "length {length} is below the minimum of {min_length}"
            )));
        }

        let expires_at = self
            .expires_at
            .map(|at| {
                u64::try_from(at).map_err(|_| CredentialError::InvalidExpiry { expires_at: at })
            })
            .transpose()?;

        let cost = u32::try_from(self.cost)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(CredentialError::InvalidCost { cost: self.cost })?;

        Ok(ValidatedOptions { expires_at, cost })
    }
}

/// Options that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValidatedOptions {
    pub(crate) expires_at: Option<u64>,
    pub(crate) cost: u32,
}
