//! The credential value type

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{CredentialError, CredentialResult};
use super::options::CreateOptions;
use super::record::CredentialRecord;
use crate::service::CredentialService;
use crate::utils::{Clock, SystemClock};

/// A hashed secret with a creation time and an optional expiry
///
/// Immutable once built. Obtain one from [`Credential::create`] (hashes a
/// plaintext) or [`Credential::new`] (rehydrates a stored record).
///
/// Serializes as its [`CredentialRecord`]; deserializing re-runs the same
/// checks as [`Credential::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CredentialRecord", try_from = "CredentialRecord")]
pub struct Credential {
    digest: String,
    created_at: u64,
    expires_at: Option<u64>,
}

impl Credential {
    /// Hash `plain` with the default Argon2id hasher and the system clock.
    ///
    /// See [`CredentialService::create`] for the validation rules.
    pub async fn create(plain: &str, options: CreateOptions) -> CredentialResult<Self> {
        CredentialService::default().create(plain, options).await
    }

    /// Rebuild a credential from a stored record, checked against the system
    /// clock.
    ///
    /// # Errors
    ///
    /// - [`CredentialError::InvalidDigest`] if the digest is empty
    /// - [`CredentialError::InvalidCreatedAt`] if the creation time is negative
    ///   or later than now
    /// - [`CredentialError::InvalidExpiry`] if the expiry is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use latch_credential::{Credential, CredentialRecord, ErrorKind};
    ///
    /// let record = CredentialRecord::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA", 0, None);
    /// let credential = Credential::new(record).unwrap();
    /// assert_eq!(credential.created_at(), 0);
    ///
    /// let empty = CredentialRecord::new("", 0, None);
    /// assert_eq!(Credential::new(empty).unwrap_err().kind(), ErrorKind::InvalidDigest);
    /// ```
    pub fn new(record: CredentialRecord) -> CredentialResult<Self> {
        Self::from_record(record, &SystemClock)
    }

    pub(crate) fn from_record<C: Clock + ?Sized>(
        record: CredentialRecord,
        clock: &C,
    ) -> CredentialResult<Self> {
        let now = clock.now_millis();

        if record.digest.is_empty() {
            return Err(CredentialError::InvalidDigest);
        }

        let created_at = u64::try_from(record.created_at).map_err(|_| {
            CredentialError::InvalidCreatedAt {
                created_at: record.created_at,
                reason: "must not be negative".into(),
            }
        })?;
        if created_at > now {
            return Err(CredentialError::InvalidCreatedAt {
                created_at: record.created_at,
                reason: format!("later than the current time {now}"),
            });
        }

        // Already-expired values are allowed; verify rejects them.
        let expires_at = record
            .expires_at
            .map(|at| {
                u64::try_from(at).map_err(|_| CredentialError::InvalidExpiry { expires_at: at })
            })
            .transpose()?;

        Ok(Self {
            digest: record.digest,
            created_at,
            expires_at,
        })
    }

    /// Check `plain` with the default Argon2id hasher and the system clock.
    ///
    /// Returns `Ok(false)` for a wrong plaintext or an expired credential.
    pub async fn verify(&self, plain: &str) -> CredentialResult<bool> {
        CredentialService::default().verify(self, plain).await
    }

    /// The stored digest, verbatim
    pub fn stringify(&self) -> &str {
        &self.digest
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Creation time in milliseconds since the Unix epoch
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Expiry in milliseconds since the Unix epoch
    pub fn expires_at(&self) -> Option<u64> {
        self.expires_at
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        to_utc(self.created_at)
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at.and_then(to_utc)
    }

    /// Whether the credential is expired at `now` (milliseconds)
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    pub fn to_record(&self) -> CredentialRecord {
        CredentialRecord::from(self)
    }
}

fn to_utc(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}

impl From<&Credential> for CredentialRecord {
    fn from(credential: &Credential) -> Self {
        Self {
            digest: credential.digest.clone(),
            created_at: credential.created_at as i64,
            expires_at: credential.expires_at.map(|at| at as i64),
        }
    }
}

impl From<Credential> for CredentialRecord {
    fn from(credential: Credential) -> Self {
        Self {
            digest: credential.digest,
            created_at: credential.created_at as i64,
            expires_at: credential.expires_at.map(|at| at as i64),
        }
    }
}

impl TryFrom<CredentialRecord> for Credential {
    type Error = CredentialError;

    fn try_from(record: CredentialRecord) -> CredentialResult<Self> {
        Self::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::testing::ManualClock;
    use pretty_assertions::assert_eq;

    const NOW: u64 = 1_700_000_000_000;

    fn record(created_at: i64, expires_at: Option<i64>) -> CredentialRecord {
        CredentialRecord::new("$fake$c=10$digest", created_at, expires_at)
    }

    #[test]
    fn test_from_record_accepts_valid_record() {
        let clock = ManualClock::new(NOW);
        let credential = Credential::from_record(record(1_000, Some(2_000)), &clock).unwrap();

        assert_eq!(credential.digest(), "$fake$c=10$digest");
        assert_eq!(credential.created_at(), 1_000);
        assert_eq!(credential.expires_at(), Some(2_000));
    }

    #[test]
    fn test_empty_digest_rejected() {
        let clock = ManualClock::new(NOW);
        let err = Credential::from_record(CredentialRecord::new("", 0, None), &clock).unwrap_err();
        assert_eq!(err, CredentialError::InvalidDigest);
    }

    #[test]
    fn test_digest_checked_before_created_at() {
        let clock = ManualClock::new(NOW);
        let err = Credential::from_record(CredentialRecord::new("", -1, Some(-1)), &clock)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDigest);
    }

    #[test]
    fn test_created_in_future_rejected() {
        let clock = ManualClock::new(NOW);
        let err = Credential::from_record(record(NOW as i64 + 1, None), &clock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCreatedAt);

        // Exactly now is fine.
        assert!(Credential::from_record(record(NOW as i64, None), &clock).is_ok());
    }

    #[test]
    fn test_negative_created_at_rejected() {
        let clock = ManualClock::new(NOW);
        let err = Credential::from_record(record(-1, None), &clock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCreatedAt);
    }

    #[test]
    fn test_negative_expiry_rejected() {
        let clock = ManualClock::new(NOW);
        let err = Credential::from_record(record(0, Some(-5)), &clock).unwrap_err();
        assert_eq!(err, CredentialError::InvalidExpiry { expires_at: -5 });
    }

    #[test]
    fn test_expiry_before_creation_allowed() {
        let clock = ManualClock::new(NOW);
        let credential = Credential::from_record(record(5_000, Some(1_000)), &clock).unwrap();
        assert!(credential.is_expired_at(5_000));
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let clock = ManualClock::new(NOW);
        let credential = Credential::from_record(record(0, Some(1_000)), &clock).unwrap();

        assert!(!credential.is_expired_at(999));
        assert!(credential.is_expired_at(1_000));
        assert!(credential.is_expired_at(1_001));

        let forever = Credential::from_record(record(0, None), &clock).unwrap();
        assert!(!forever.is_expired_at(u64::MAX));
    }

    #[test]
    fn test_stringify_and_display_return_digest() {
        let clock = ManualClock::new(NOW);
        let credential = Credential::from_record(record(0, None), &clock).unwrap();

        assert_eq!(credential.stringify(), "$fake$c=10$digest");
        assert_eq!(credential.to_string(), credential.digest());
    }

    #[test]
    fn test_record_round_trip() {
        let clock = ManualClock::new(NOW);
        let original = record(1_234, Some(9_999));
        let credential = Credential::from_record(original.clone(), &clock).unwrap();

        assert_eq!(credential.to_record(), original);
        assert_eq!(CredentialRecord::from(credential), original);
    }

    #[test]
    fn test_utc_accessors() {
        let clock = ManualClock::new(NOW);
        let credential = Credential::from_record(record(1_000, Some(2_500)), &clock).unwrap();

        assert_eq!(
            credential.created_at_utc().map(|t| t.timestamp_millis()),
            Some(1_000)
        );
        assert_eq!(
            credential.expires_at_utc().map(|t| t.timestamp_millis()),
            Some(2_500)
        );
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let credential: Credential =
            serde_json::from_str(r#"{"digest": "abc", "createdAt": 10, "expiresAt": null}"#)
                .unwrap();
        assert_eq!(credential.digest(), "abc");

        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, r#"{"digest":"abc","createdAt":10,"expiresAt":null}"#);

        let bad = serde_json::from_str::<Credential>(r#"{"digest": "", "createdAt": 10}"#);
        assert!(bad.is_err());
    }
}
