//! The exported shape of a single digest

use hashify_core::{DigestRequest, HashAlgorithm, SaltPosition};
use serde::{Deserialize, Serialize};

/// A computed digest together with the inputs that produced it
///
/// Serializes as `{text, algorithm, hash}` plus `salt` and `saltPosition`
/// when a salt was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRecord {
    pub text: String,
    pub algorithm: HashAlgorithm,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_position: Option<SaltPosition>,
}

impl DigestRecord {
    pub fn from_request(request: &DigestRequest, hash: String) -> Self {
        let (salt, salt_position) = if request.is_salted() {
            (Some(request.salt.clone()), Some(request.salt_position))
        } else {
            (None, None)
        };

        Self {
            text: request.text.clone(),
            algorithm: request.algorithm,
            hash,
            salt,
            salt_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsalted_record_omits_salt_fields() {
        let request = DigestRequest::new("hello", HashAlgorithm::MD5);
        let record = DigestRecord::from_request(&request, "5d41402abc4b2a76b9719d911017c592".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hello",
                "algorithm": "md5",
                "hash": "5d41402abc4b2a76b9719d911017c592"
            })
        );
    }

    #[test]
    fn test_salted_record_uses_camel_case() {
        let request = DigestRequest::new("bar", HashAlgorithm::SHA256)
            .with_salt("foo", SaltPosition::Postfix);
        let record = DigestRecord::from_request(&request, "x".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["salt"], "foo");
        assert_eq!(json["saltPosition"], "postfix");
    }
}
