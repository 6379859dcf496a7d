//! # mall-admin-gateway
//!
//! Admin backend for the mall directory: a login check, a broadcast
//! notification command, an in-memory store registry, and a realtime
//! WebSocket channel that mirrors every mutation to connected admins.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket /ws/admin)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── AdminService (service/)
//!     │
//!     ├── StoreRegistry (domain/)
//!     ├── Broadcaster (domain/)
//!     └── CredentialVerifier (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
