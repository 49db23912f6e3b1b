//! Persisted credential shape

use serde::{Deserialize, Serialize};

/// The fields a [`Credential`](crate::Credential) is stored as
///
/// Serializes as `{"digest": ..., "createdAt": ..., "expiresAt": ...}`.
/// Timestamps are signed so corrupted values survive deserialization and are
/// rejected by [`Credential::new`](crate::Credential::new) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Output of the one-way hash
    pub digest: String,

    /// Creation time, milliseconds since the Unix epoch
    pub created_at: i64,

    /// Expiry, milliseconds since the Unix epoch
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl CredentialRecord {
    pub fn new(digest: impl Into<String>, created_at: i64, expires_at: Option<i64>) -> Self {
        Self {
            digest: digest.into(),
            created_at,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_shape() {
        let record = CredentialRecord::new("$argon2id$v=19$abc", 1_000, Some(2_000));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "digest": "$argon2id$v=19$abc",
                "createdAt": 1_000,
                "expiresAt": 2_000,
            })
        );
    }

    #[test]
    fn test_missing_expiry_means_never() {
        let record: CredentialRecord =
            serde_json::from_str(r#"{"digest": "d", "createdAt": 5}"#).unwrap();
        assert_eq!(record.expires_at, None);

        let record: CredentialRecord =
            serde_json::from_str(r#"{"digest": "d", "createdAt": 5, "expiresAt": null}"#).unwrap();
        assert_eq!(record.expires_at, None);
    }

    #[test]
    fn test_negative_values_deserialize() {
        let record: CredentialRecord =
            serde_json::from_str(r#"{"digest": "d", "createdAt": -5, "expiresAt": -1}"#).unwrap();
        assert_eq!(record.created_at, -5);
        assert_eq!(record.expires_at, Some(-1));
    }
}
