//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod store;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all command routes at the root path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(admin::routes())
        .merge(store::routes())
        .merge(system::routes())
}
