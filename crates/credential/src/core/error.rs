//! Credential error types
//!
//! Every failure of [`Credential`](crate::Credential) operations maps to exactly
//! one [`ErrorKind`]. The kind names are stable identifiers and must not change.

use std::fmt;

use thiserror::Error;

/// Errors raised while creating, restoring or verifying a credential
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Minimum plaintext length is zero or negative
    #[error("Invalid minimum length {min_length}: must be greater than zero")]
    InvalidMinLength { min_length: i64 },

    /// Plaintext is too short (create) or empty (verify)
    #[error("Invalid plaintext: {reason}")]
    InvalidPlain { reason: String },

    /// Expiry timestamp is negative
    #[error("Invalid expiry {expires_at}: must not be negative")]
    InvalidExpiry { expires_at: i64 },

    /// Hashing cost is zero, negative or out of range
    #[error("Invalid cost {cost}: must be between 1 and {}", u32::MAX)]
    InvalidCost { cost: i64 },

    /// The hasher failed to hash or compare
    #[error("Hashing failure during {operation}")]
    HashingFailure { operation: &'static str },

    /// Stored digest is empty
    #[error("Invalid digest: must not be empty")]
    InvalidDigest,

    /// Creation timestamp is negative or in the future
    #[error("Invalid creation time {created_at}: {reason}")]
    InvalidCreatedAt { created_at: i64, reason: String },
}

impl CredentialError {
    /// Stable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMinLength { .. } => ErrorKind::InvalidMinLength,
            Self::InvalidPlain { .. } => ErrorKind::InvalidPlain,
            Self::InvalidExpiry { .. } => ErrorKind::InvalidExpiry,
            Self::InvalidCost { .. } => ErrorKind::InvalidCost,
            Self::HashingFailure { .. } => ErrorKind::HashingFailure,
            Self::InvalidDigest => ErrorKind::InvalidDigest,
            Self::InvalidCreatedAt { .. } => ErrorKind::InvalidCreatedAt,
        }
    }

    pub(crate) fn invalid_plain(reason: impl Into<String>) -> Self {
        Self::InvalidPlain {
            reason: reason.into(),
        }
    }
}

/// Closed set of credential error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMinLength,
    InvalidPlain,
    InvalidExpiry,
    InvalidCost,
    HashingFailure,
    InvalidDigest,
    InvalidCreatedAt,
}

impl ErrorKind {
    /// Stable identifier, identical to the variant name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidMinLength => "InvalidMinLength",
            Self::InvalidPlain => "InvalidPlain",
            Self::InvalidExpiry => "InvalidExpiry",
            Self::InvalidCost => "InvalidCost",
            Self::HashingFailure => "HashingFailure",
            Self::InvalidDigest => "InvalidDigest",
            Self::InvalidCreatedAt => "InvalidCreatedAt",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`SecretHasher`](crate::SecretHasher)
///
/// Only the category survives into [`CredentialError::HashingFailure`]; the
/// message is logged at the call site.
#[derive(Debug, Error)]
#[error("hasher error: {message}")]
pub struct HashError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HashError {
    /// Error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for credential operations
pub type CredentialResult<T> = Result<T, CredentialError>;
