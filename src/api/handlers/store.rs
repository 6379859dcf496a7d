//! Store handlers: create and list.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateStoreResponse, StoreListResponse};
use crate::app_state::AppState;
use crate::domain::StoreRecord;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /create-store` — Append a store and announce it.
///
/// The body is stored verbatim; no schema is enforced.
///
/// # Errors
///
/// Returns [`GatewayError::Internal`] if the body is not JSON.
#[utoipa::path(
    post,
    path = "/create-store",
    tag = "Stores",
    summary = "Create a store",
    description = "Appends the posted JSON to the store list and emits a `store_created` event to every admin session.",
    request_body(content = serde_json::Value, description = "Arbitrary store payload"),
    responses(
        (status = 200, description = "Store created", body = CreateStoreResponse),
        (status = 500, description = "Body could not be parsed", body = ErrorResponse),
    )
)]
pub async fn create_store(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(body) = body?;
    state
        .admin_service
        .create_store(StoreRecord::new(body))
        .await;

    Ok(Json(CreateStoreResponse {
        message: "Store created successfully".to_string(),
    }))
}

/// `GET /get-stores` — List every store in creation order.
#[utoipa::path(
    get,
    path = "/get-stores",
    tag = "Stores",
    summary = "List stores",
    description = "Returns every store created since process start, in creation order.",
    responses(
        (status = 200, description = "Store list", body = StoreListResponse),
    )
)]
pub async fn get_stores(State(state): State<AppState>) -> impl IntoResponse {
    let stores = state.admin_service.list_stores().await;
    Json(StoreListResponse { stores })
}

/// Store routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-store", post(create_store))
        .route("/get-stores", get(get_stores))
}
