//! Data Transfer Objects for REST request/response serialization.

pub mod auth_dto;
pub mod common_dto;
pub mod notification_dto;
pub mod store_dto;

pub use auth_dto::*;
pub use common_dto::*;
pub use notification_dto::*;
pub use store_dto::*;
