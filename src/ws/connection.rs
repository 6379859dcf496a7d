//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single admin session: registers with
//! the [`crate::domain::Broadcaster`], forwards queued events to the
//! client, relays client events back to the same session, and deregisters
//! on disconnect.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::messages::ClientEvent;
use crate::domain::AdminEvent;
use crate::service::AdminService;

/// Lifecycle of one admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Upgrade accepted, not yet registered.
    Connecting,
    /// Registered and receiving broadcasts.
    Connected,
    /// Deregistered. Terminal.
    Disconnected,
}

impl ConnectionState {
    /// Returns the next state, or `None` if the transition is not allowed.
    #[must_use]
    pub const fn advance(self) -> Option<Self> {
        match self {
            Self::Connecting => Some(Self::Connected),
            Self::Connected => Some(Self::Disconnected),
            Self::Disconnected => None,
        }
    }

    /// Advances one step; the terminal state stays where it is.
    #[must_use]
    pub const fn step(self) -> Self {
        match self.advance() {
            Some(next) => next,
            None => self,
        }
    }
}

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads events from the client and relays replies to this session.
/// - Forwards events from the session queue to the client.
pub async fn run_connection(
    socket: WebSocket,
    admin_service: Arc<AdminService>,
    welcome_message: Option<Arc<str>>,
) {
    let mut state = ConnectionState::Connecting;
    let (mut ws_tx, mut ws_rx) = socket.split();

    let broadcaster = Arc::clone(admin_service.broadcaster());
    let (session_id, mut event_rx) = broadcaster.register().await;
    state = state.step();
    tracing::info!(%session_id, ?state, "admin connected");

    if let Some(text) = welcome_message
        && !broadcaster
            .send_to(session_id, AdminEvent::admin_response(&*text))
            .await
    {
        tracing::debug!(%session_id, "welcome not queued");
    }

    loop {
        tokio::select! {
            // Incoming frame from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match ClientEvent::parse(&text) {
                            Ok(event) => {
                                tracing::debug!(%session_id, ?event, "relaying client event");
                                let reply = event.into_reply();
                                let name = reply.name();
                                if !broadcaster.send_to(session_id, reply).await {
                                    tracing::debug!(%session_id, event = name, "relay reply not queued");
                                }
                            }
                            Err(err) => {
                                tracing::warn!(%session_id, error = %err, "ignoring client frame");
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%session_id, error = %err, "ws read error");
                        break;
                    }
                    _ => {}
                }
            }
            // Event queued for this session
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match serde_json::to_string(&event) {
                    Ok(json) => {
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%session_id, error = %err, "failed to encode event");
                    }
                }
            }
        }
    }

    broadcaster.deregister(session_id).await;
    state = state.step();
    debug_assert_eq!(state, ConnectionState::Disconnected);
    tracing::info!(%session_id, ?state, "admin disconnected");
}
