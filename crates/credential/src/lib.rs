//! Latch Credential - salted, hashed credentials with optional expiry
//!
//! A [`Credential`] holds the digest of a plaintext secret, the time it was
//! created and, optionally, the time after which it stops verifying.
//!
//! # Features
//!
//! - **Validated construction** - plaintext length, cost and expiry are checked
//!   in a fixed order before anything is hashed
//! - **Pluggable hashing** - the one-way function sits behind [`SecretHasher`];
//!   [`Argon2Hasher`] is the production implementation
//! - **Expiry short-circuit** - an expired credential answers `false` without
//!   touching the hasher
//! - **Rehydration** - [`CredentialRecord`] is the persisted shape; rebuilding a
//!   credential from it re-applies every invariant
//!
//! # Example
//!
//! ```no_run
//! use latch_credential::{CreateOptions, Credential};
//!
//! # async fn example() -> latch_credential::CredentialResult<()> {
//! let credential = Credential::create("7PaeT/A#4k8&7G/TpEuu1rg", CreateOptions::default()).await?;
//! assert!(credential.verify("7PaeT/A#4k8&7G/TpEuu1rg").await?);
//!
//! let record = credential.to_record();
//! let restored = latch_credential::Credential::new(record)?;
//! assert_eq!(restored.stringify(), credential.stringify());
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

/// Configuration loading
pub mod config;
/// The credential value type, its record, options and errors
pub mod core;
/// The hashing seam and the Argon2id implementation
pub mod hashing;
/// Service wiring a hasher and a clock together
pub mod service;
/// Test doubles for the hashing and clock seams
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
/// Time utilities
pub mod utils;

// ── Root re-exports ─────────────────────────────────────────────────────────

pub use crate::config::{Argon2Config, ConfigError, CredentialConfig};
pub use crate::core::{
    CreateOptions, Credential, CredentialError, CredentialRecord, CredentialResult, ErrorKind,
    HashError,
};
pub use crate::hashing::{Argon2Hasher, SecretHasher};
pub use crate::service::{CredentialService, CredentialServiceBuilder};
pub use crate::utils::{Clock, SystemClock};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::config::CredentialConfig;
    pub use crate::core::{
        CreateOptions, Credential, CredentialError, CredentialRecord, CredentialResult, ErrorKind,
    };
    pub use crate::hashing::{Argon2Hasher, SecretHasher};
    pub use crate::service::CredentialService;
    pub use crate::utils::{Clock, SystemClock};
}
