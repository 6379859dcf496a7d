//! Subscriber registry and fan-out for the admin channel.
//!
//! Each realtime session registers on connect and receives a bounded
//! [`mpsc::Receiver`] of [`AdminEvent`]s; it deregisters on disconnect.
//! [`Broadcaster::broadcast`] takes a snapshot of the subscriber set, drops
//! the lock, and queues the event with `try_send`, so a slow session never
//! stalls the caller or the other sessions.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, error::TrySendError};

use super::{AdminEvent, SessionId};

/// Default per-session queue capacity.
pub const DEFAULT_SESSION_QUEUE_CAPACITY: usize = 256;

/// Explicit registry of connected admin sessions.
///
/// Delivery is at-most-once and best-effort: when a session's queue is
/// full the event is dropped for that session only.
#[derive(Debug)]
pub struct Broadcaster {
    subscribers: RwLock<HashMap<SessionId, mpsc::Sender<AdminEvent>>>,
    queue_capacity: usize,
}

impl Broadcaster {
    /// Creates an empty broadcaster with the given per-session capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            queue_capacity: queue_capacity.max(1),
        }
    }

    /// Registers a new session and returns its id and event queue.
    pub async fn register(&self) -> (SessionId, mpsc::Receiver<AdminEvent>) {
        let (tx, rx) = mpsc::channel(self.queue_capacity);
        let session_id = SessionId::new();
        self.subscribers.write().await.insert(session_id, tx);
        tracing::debug!(%session_id, "session registered");
        (session_id, rx)
    }

    /// Removes a session. Returns `true` if it was registered.
    pub async fn deregister(&self, session_id: SessionId) -> bool {
        let removed = self.subscribers.write().await.remove(&session_id).is_some();
        if removed {
            tracing::debug!(%session_id, "session deregistered");
        }
        removed
    }

    /// Queues `event` for every registered session.
    ///
    /// Returns the number of sessions the event was queued for.
    pub async fn broadcast(&self, event: AdminEvent) -> usize {
        let snapshot: Vec<(SessionId, mpsc::Sender<AdminEvent>)> = self
            .subscribers
            .read()
            .await
            .iter()
            .map(|(id, tx)| (*id, tx.clone()))
            .collect();

        let mut delivered = 0;
        for (session_id, tx) in snapshot {
            if offer(session_id, &tx, event.clone()) {
                delivered += 1;
            }
        }
        tracing::debug!(event = event.name(), delivered, "event broadcast");
        delivered
    }

    /// Queues `event` for a single session.
    ///
    /// Returns `false` if the session is unknown, closed, or its queue is
    /// full.
    pub async fn send_to(&self, session_id: SessionId, event: AdminEvent) -> bool {
        let tx = self.subscribers.read().await.get(&session_id).cloned();
        match tx {
            Some(tx) => offer(session_id, &tx, event),
            None => false,
        }
    }

    /// Returns the number of registered sessions.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_QUEUE_CAPACITY)
    }
}

fn offer(session_id: SessionId, tx: &mpsc::Sender<AdminEvent>, event: AdminEvent) -> bool {
    match tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(event)) => {
            tracing::warn!(%session_id, event = event.name(), "session queue full, event dropped");
            false
        }
        Err(TrySendError::Closed(_)) => false,
    }
}
