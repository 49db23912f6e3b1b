//! Core types for credential hashing and verification

mod credential;
mod error;
mod options;
mod record;

pub use credential::Credential;
pub use error::{CredentialError, CredentialResult, ErrorKind, HashError};
pub use options::{CreateOptions, DEFAULT_COST, DEFAULT_MIN_LENGTH};
pub(crate) use options::ValidatedOptions;
pub use record::CredentialRecord;
