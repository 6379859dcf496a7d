//! Admin command handlers: login and push notification.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{AckResponse, LoginRequest, PushNotificationRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /admin-login` — Check admin credentials.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] on mismatch or missing fields and
/// [`GatewayError::Internal`] if the body is not a JSON object.
#[utoipa::path(
    post,
    path = "/admin-login",
    tag = "Admin",
    summary = "Admin login",
    description = "Grants access when the username/password pair matches the configured admin credentials.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AckResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Body could not be parsed", body = ErrorResponse),
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let body = object_body(body?)?;
    let req = LoginRequest::from_value(&body);

    state
        .admin_service
        .authenticate(req.username.as_deref(), req.password.as_deref())?;

    Ok(Json(AckResponse::ok("Login successful")))
}

/// `POST /push-notification` — Broadcast a message to all admin sessions.
///
/// # Errors
///
/// Returns [`GatewayError::BadRequest`] if the message is absent or empty
/// and [`GatewayError::Internal`] if the body is not a JSON object.
#[utoipa::path(
    post,
    path = "/push-notification",
    tag = "Admin",
    summary = "Push a notification",
    description = "Sends an `admin_response` event with the given message to every connected admin session.",
    request_body = PushNotificationRequest,
    responses(
        (status = 200, description = "Notification sent", body = AckResponse),
        (status = 400, description = "Empty message", body = ErrorResponse),
        (status = 500, description = "Body could not be parsed", body = ErrorResponse),
    )
)]
pub async fn push_notification(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let body = object_body(body?)?;
    let req = PushNotificationRequest::from_value(&body);

    state
        .admin_service
        .push_notification(req.message.as_deref())
        .await?;

    Ok(Json(AckResponse::ok("Notification sent successfully")))
}

/// Unwraps a JSON body that must be an object.
///
/// # Errors
///
/// Returns [`GatewayError::Internal`] for `null`, arrays, and scalars.
fn object_body(Json(body): Json<serde_json::Value>) -> Result<serde_json::Value, GatewayError> {
    if body.is_object() {
        Ok(body)
    } else {
        Err(GatewayError::Internal(format!(
            "expected a JSON object body, got {body}"
        )))
    }
}

/// Admin command routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin-login", post(admin_login))
        .route("/push-notification", post(push_notification))
}
