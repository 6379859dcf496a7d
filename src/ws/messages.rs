//! WebSocket frame types for the admin channel.
//!
//! Frames are JSON text of the form `{"event": "<name>", "data": <value>}`
//! in both directions. Outbound frames are serialized [`AdminEvent`]s;
//! inbound frames are parsed here into [`ClientEvent`]s.

use serde::Deserialize;

use crate::domain::admin_event::STORE_CREATED;
use crate::domain::{AdminEvent, StoreRecord};

/// Event name a client uses to send an admin action.
pub const ADMIN_ACTION: &str = "admin_action";

/// Message echoed when an `admin_action` carries no `message`.
pub const NO_MESSAGE: &str = "No message";

/// Raw inbound frame before event dispatch.
#[derive(Debug, Deserialize)]
pub struct ClientFrame {
    /// Event name.
    pub event: String,
    /// Event payload; `null` when omitted.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Events a connected session may send.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// `admin_action {message}`: relayed back as `admin_response`.
    AdminAction {
        /// Message to echo.
        message: String,
    },
    /// `store_created <value>`: echoed back unchanged.
    StoreCreated(StoreRecord),
}

/// Reasons an inbound frame could not be handled.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame was not valid JSON or lacked an `event` field.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The event name is not part of the admin channel vocabulary.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// The event payload has the wrong shape.
    #[error("invalid {event} payload: {reason}")]
    InvalidPayload {
        /// Event name.
        event: &'static str,
        /// What was wrong.
        reason: &'static str,
    },
}

impl ClientEvent {
    /// Parses a text frame into a client event.
    ///
    /// # Errors
    ///
    /// Returns a [`FrameError`] for malformed JSON, unknown event names, or
    /// an `admin_action` whose payload is not an object with an optional
    /// string `message`.
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let frame: ClientFrame = serde_json::from_str(text)?;
        match frame.event.as_str() {
            ADMIN_ACTION => {
                let Some(data) = frame.data.as_object() else {
                    return Err(FrameError::InvalidPayload {
                        event: ADMIN_ACTION,
                        reason: "expected an object",
                    });
                };
                let message = match data.get("message") {
                    None => NO_MESSAGE.to_string(),
                    Some(serde_json::Value::String(s)) => s.clone(),
                    Some(_) => {
                        return Err(FrameError::InvalidPayload {
                            event: ADMIN_ACTION,
                            reason: "message must be a string",
                        });
                    }
                };
                Ok(Self::AdminAction { message })
            }
            STORE_CREATED => Ok(Self::StoreCreated(StoreRecord::new(frame.data))),
            other => Err(FrameError::UnknownEvent(other.to_string())),
        }
    }

    /// Returns the event the server sends back to the originating session.
    #[must_use]
    pub fn into_reply(self) -> AdminEvent {
        match self {
            Self::AdminAction { message } => AdminEvent::admin_response(message),
            Self::StoreCreated(record) => AdminEvent::StoreCreated(record),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn admin_action_is_replied_as_admin_response() {
        let Ok(event) = ClientEvent::parse(r#"{"event":"admin_action","data":{"message":"hi"}}"#)
        else {
            panic!("parse failed");
        };
        assert_eq!(event.into_reply(), AdminEvent::admin_response("hi"));
    }

    #[test]
    fn admin_action_without_message_uses_placeholder() {
        let Ok(event) = ClientEvent::parse(r#"{"event":"admin_action","data":{}}"#) else {
            panic!("parse failed");
        };
        assert_eq!(
            event,
            ClientEvent::AdminAction {
                message: NO_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn admin_action_with_non_object_data_is_rejected() {
        let result = ClientEvent::parse(r#"{"event":"admin_action","data":"hi"}"#);
        let Err(FrameError::InvalidPayload { .. }) = result else {
            panic!("expected InvalidPayload, got {result:?}");
        };
    }

    #[test]
    fn store_created_is_echoed_verbatim() {
        let Ok(event) = ClientEvent::parse(r#"{"event":"store_created","data":{"name":"X"}}"#)
        else {
            panic!("parse failed");
        };
        assert_eq!(
            event.into_reply(),
            AdminEvent::StoreCreated(StoreRecord::new(json!({"name": "X"})))
        );
    }

    #[test]
    fn unknown_event_is_rejected() {
        let result = ClientEvent::parse(r#"{"event":"delete_store","data":{}}"#);
        let Err(FrameError::UnknownEvent(name)) = result else {
            panic!("expected UnknownEvent");
        };
        assert_eq!(name, "delete_store");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let Err(FrameError::Malformed(_)) = ClientEvent::parse("not json") else {
            panic!("expected Malformed");
        };
    }
}
