//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Commands are mounted at the root path (`/admin-login`,
//! `/push-notification`, `/create-store`, `/get-stores`) next to `/health`.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::ws::handler::{ADMIN_CHANNEL_PATH, ws_handler};

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the full application: REST commands, the admin WebSocket
/// channel, request tracing, and permissive CORS.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(build_router())
        .route(ADMIN_CHANNEL_PATH, get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
