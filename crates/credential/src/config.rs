//! Configuration types for credential creation and hashing

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CreateOptions, DEFAULT_COST, DEFAULT_MIN_LENGTH};

/// Errors raised while loading a [`CredentialConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON document
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Environment variable present but not parsable
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Defaults applied by a [`CredentialService`](crate::CredentialService)
///
/// Values are not validated here; bad `min_length` or `cost` surface as the
/// usual creation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// Minimum plaintext length, in characters
    pub min_length: i64,

    /// Work factor passed to the hasher
    pub cost: i64,

    /// Argon2 memory and lanes
    pub argon2: Argon2Config,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            cost: DEFAULT_COST,
            argon2: Argon2Config::default(),
        }
    }
}

impl CredentialConfig {
    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create configuration from environment variables
    ///
    /// Reads `LATCH_MIN_LENGTH`, `LATCH_COST`, `LATCH_ARGON2_MEMORY_KIB` and
    /// `LATCH_ARGON2_PARALLELISM`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = parse_var(&lookup, "LATCH_MIN_LENGTH")? {
            config.min_length = value;
        }
        if let Some(value) = parse_var(&lookup, "LATCH_COST")? {
            config.cost = value;
        }
        if let Some(value) = parse_var(&lookup, "LATCH_ARGON2_MEMORY_KIB")? {
            config.argon2.memory_kib = value;
        }
        if let Some(value) = parse_var(&lookup, "LATCH_ARGON2_PARALLELISM")? {
            config.argon2.parallelism = value;
        }

        Ok(config)
    }

    /// Creation options seeded from this configuration
    pub fn create_options(&self) -> CreateOptions {
        CreateOptions::new()
            .with_min_length(self.min_length)
            .with_cost(self.cost)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

/// Argon2 memory and parallelism
///
/// The time cost is not part of this struct; it is the per-credential `cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Config {
    /// Memory size in KiB
    pub memory_kib: u32,

    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}
