//! WebSocket layer: the `/admin` realtime channel.
//!
//! The endpoint at `/ws/admin` pushes `admin_response` and `store_created`
//! events to every connected session and relays session-originated events
//! back to their sender.

pub mod connection;
pub mod handler;
pub mod messages;
