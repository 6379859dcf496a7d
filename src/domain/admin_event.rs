//! Events delivered to realtime admin sessions.
//!
//! Every server→client frame on the admin channel carries one
//! [`AdminEvent`]. HTTP-triggered mutations fan them out through the
//! [`super::Broadcaster`]; session-originated relays send them back to the
//! originating session only.

use serde::Serialize;

use super::StoreRecord;

/// Event name for notification messages.
pub const ADMIN_RESPONSE: &str = "admin_response";

/// Event name for newly created stores.
pub const STORE_CREATED: &str = "store_created";

/// Server→client event on the admin channel.
///
/// Serialized as `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum AdminEvent {
    /// A notification or relayed admin action.
    AdminResponse {
        /// Message text.
        message: String,
    },

    /// A store record, carried verbatim.
    StoreCreated(StoreRecord),
}

impl AdminEvent {
    /// Builds an `admin_response` event.
    #[must_use]
    pub fn admin_response(message: impl Into<String>) -> Self {
        Self::AdminResponse {
            message: message.into(),
        }
    }

    /// Returns the wire name of this event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AdminResponse { .. } => ADMIN_RESPONSE,
            Self::StoreCreated(_) => STORE_CREATED,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn admin_response_wire_shape() {
        let event = AdminEvent::admin_response("hi");
        let Ok(value) = serde_json::to_value(&event) else {
            panic!("serialization failed");
        };
        assert_eq!(
            value,
            json!({"event": "admin_response", "data": {"message": "hi"}})
        );
    }

    #[test]
    fn store_created_carries_record_verbatim() {
        let event = AdminEvent::StoreCreated(StoreRecord::new(json!({"name": "X"})));
        let Ok(value) = serde_json::to_value(&event) else {
            panic!("serialization failed");
        };
        assert_eq!(value, json!({"event": "store_created", "data": {"name": "X"}}));
    }

    #[test]
    fn names_match_wire_tags() {
        assert_eq!(AdminEvent::admin_response("x").name(), ADMIN_RESPONSE);
        assert_eq!(
            AdminEvent::StoreCreated(StoreRecord::new(json!(null))).name(),
            STORE_CREATED
        );
    }
}
