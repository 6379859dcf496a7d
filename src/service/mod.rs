//! Service layer: business logic orchestration.
//!
//! [`AdminService`] coordinates the admin commands, mutates the
//! [`super::domain::StoreRegistry`], and emits events through the
//! [`super::domain::Broadcaster`].

pub mod admin_service;

pub use admin_service::AdminService;
