//! Opaque store record.

use serde::{Deserialize, Serialize};

/// One store as submitted by an administrator.
///
/// The payload is schema-free: whatever JSON the client posts is kept
/// verbatim and returned verbatim. No identity or uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreRecord(serde_json::Value);

impl StoreRecord {
    /// Wraps a raw JSON value.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Consumes the record and returns the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for StoreRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_transparently() {
        let record = StoreRecord::new(json!({"name": "ADIDAS", "floor": "2"}));
        let Ok(text) = serde_json::to_string(&record) else {
            panic!("serialization failed");
        };
        assert_eq!(text, r#"{"floor":"2","name":"ADIDAS"}"#);
    }

    #[test]
    fn empty_object_is_a_valid_record() {
        let record = StoreRecord::from(json!({}));
        assert_eq!(record.into_value(), json!({}));
    }
}
