//! Store DTOs for create and list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::StoreRecord;

/// Response body for `POST /create-store`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateStoreResponse {
    /// Confirmation text.
    pub message: String,
}

/// Response body for `GET /get-stores`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreListResponse {
    /// Every store in creation order, verbatim.
    #[schema(value_type = Vec<Object>)]
    pub stores: Vec<StoreRecord>,
}
