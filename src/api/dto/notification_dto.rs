//! Push-notification DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /push-notification`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PushNotificationRequest {
    /// Notification text. Absent or empty is rejected with 400.
    #[serde(default)]
    pub message: Option<String>,
}

impl PushNotificationRequest {
    /// Extracts the message from an arbitrary JSON body.
    ///
    /// A non-string `message` is treated as absent.
    #[must_use]
    pub fn from_value(body: &serde_json::Value) -> Self {
        Self {
            message: body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
        }
    }
}
