//! OpenAPI document for the HTTP command surface.

use utoipa::OpenApi;

use super::dto::{
    AckResponse, CreateStoreResponse, LoginRequest, PushNotificationRequest, StoreListResponse,
};
use super::handlers::{admin, store, system};
use crate::error::ErrorResponse;

/// Generated OpenAPI description, served by Swagger UI when the
/// `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "mall-admin-gateway",
        description = "Admin commands and store registry for the mall directory. Realtime events are served over WebSocket at `/ws/admin`."
    ),
    paths(
        admin::admin_login,
        admin::push_notification,
        store::create_store,
        store::get_stores,
        system::health_handler,
    ),
    components(schemas(
        AckResponse,
        CreateStoreResponse,
        ErrorResponse,
        LoginRequest,
        PushNotificationRequest,
        StoreListResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Admin", description = "Login and notifications"),
        (name = "Stores", description = "In-memory store registry"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_command() {
        let doc = ApiDoc::openapi();
        for path in [
            "/admin-login",
            "/push-notification",
            "/create-store",
            "/get-stores",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
