//! Domain layer: store records, the store registry, credential checks, and
//! the admin-channel broadcaster.

pub mod admin_event;
pub mod broadcaster;
pub mod credentials;
pub mod session_id;
pub mod store_record;
pub mod store_registry;

pub use admin_event::AdminEvent;
pub use broadcaster::Broadcaster;
pub use credentials::{CredentialVerifier, StaticCredentials};
pub use session_id::SessionId;
pub use store_record::StoreRecord;
pub use store_registry::StoreRegistry;
