//! Detail exposure for internal errors.
//!
//! Kept in its own test binary because the exposure switch is
//! process-wide.

#![allow(clippy::panic, clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use mall_admin_gateway::api::build_app;
use mall_admin_gateway::app_state::AppState;
use mall_admin_gateway::config::GatewayConfig;
use mall_admin_gateway::error::{INTERNAL_ERROR_MESSAGE, set_expose_details};

#[tokio::test]
async fn exposed_details_include_parse_error_text() {
    set_expose_details(true);
    let app = build_app(AppState::from_config(&GatewayConfig::default()));

    let request = Request::builder()
        .method("POST")
        .uri("/create-store")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], Value::Bool(false));

    let Some(message) = body["message"].as_str() else {
        panic!("message missing: {body}");
    };
    assert_ne!(message, INTERNAL_ERROR_MESSAGE);
    assert!(!message.is_empty());
}
