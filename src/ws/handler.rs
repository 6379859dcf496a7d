//! Axum WebSocket upgrade handler.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// Path of the `/admin` realtime namespace.
pub const ADMIN_CHANNEL_PATH: &str = "/ws/admin";

/// `GET /ws/admin` — Upgrade HTTP connection to a WebSocket admin session.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let admin_service = Arc::clone(&state.admin_service);
    let welcome_message = state.welcome_message.clone();

    ws.on_upgrade(move |socket| run_connection(socket, admin_service, welcome_message))
}
