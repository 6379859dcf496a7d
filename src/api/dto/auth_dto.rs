//! Admin login DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /admin-login`.
///
/// Both fields are optional on the wire; a missing or non-string field is
/// treated as a credential mismatch rather than a parse error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin username.
    #[serde(default)]
    pub username: Option<String>,
    /// Admin password.
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Extracts the credential fields from an arbitrary JSON body.
    #[must_use]
    pub fn from_value(body: &serde_json::Value) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        };
        Self {
            username: field("username"),
            password: field("password"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_string_fields() {
        let req = LoginRequest::from_value(&json!({"username": "1", "password": "1"}));
        assert_eq!(req.username.as_deref(), Some("1"));
        assert_eq!(req.password.as_deref(), Some("1"));
    }

    #[test]
    fn from_value_treats_wrong_types_as_missing() {
        let req = LoginRequest::from_value(&json!({"username": 1, "password": null}));
        assert!(req.username.is_none());
        assert!(req.password.is_none());

        let req = LoginRequest::from_value(&json!(["1", "1"]));
        assert!(req.username.is_none());
    }
}
