//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{success, message}` envelope shared by login and notification responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    /// Whether the command succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl AckResponse {
    /// Builds a successful acknowledgment.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
