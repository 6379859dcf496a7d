//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::{Broadcaster, StaticCredentials, StoreRegistry};
use crate::service::AdminService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Admin service for all business logic.
    pub admin_service: Arc<AdminService>,
    /// Welcome text sent to each realtime session on connect.
    pub welcome_message: Option<Arc<str>>,
}

impl AppState {
    /// Builds the domain and service layers from configuration.
    ///
    /// The registry and broadcaster are created here, once per process.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        let registry = Arc::new(StoreRegistry::new());
        let broadcaster = Arc::new(Broadcaster::new(config.session_queue_capacity));
        let verifier = Arc::new(StaticCredentials::new(
            config.admin_username.as_str(),
            config.admin_password.as_str(),
        ));

        Self {
            admin_service: Arc::new(AdminService::new(registry, broadcaster, verifier)),
            welcome_message: config.welcome_message.as_deref().map(Arc::<str>::from),
        }
    }
}
