//! One-way hashing seam
//!
//! [`Credential`](crate::Credential) never hashes anything itself. It asks a
//! [`SecretHasher`] to produce a digest and later to compare a plaintext
//! against it. [`Argon2Hasher`] is the implementation used by default.

mod argon2id;

use async_trait::async_trait;

use crate::core::HashError;

pub use argon2id::Argon2Hasher;

/// Salted one-way hash function
///
/// Both operations may fail. A failed `compare` is an error, distinct from a
/// mismatch, which is `Ok(false)`.
///
/// # Example
///
/// ```rust,ignore
/// use latch_credential::{HashError, SecretHasher};
///
/// #[async_trait]
/// impl SecretHasher for ScryptHasher {
///     async fn hash(&self, plain: &str, cost: u32) -> Result<String, HashError> {
///         scrypt_hash(plain, cost).map_err(|e| HashError::with_source("scrypt", e))
///     }
///
///     async fn compare(&self, plain: &str, digest: &str) -> Result<bool, HashError> {
///         scrypt_check(plain, digest).map_err(|e| HashError::with_source("scrypt", e))
///     }
/// }
/// ```
#[async_trait]
pub trait SecretHasher: Send + Sync + std::fmt::Debug {
    /// Hash `plain` with work factor `cost`, returning an opaque digest
    async fn hash(&self, plain: &str, cost: u32) -> Result<String, HashError>;

    /// Whether `plain` hashes to `digest`
    async fn compare(&self, plain: &str, digest: &str) -> Result<bool, HashError>;
}
