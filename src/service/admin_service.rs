//! Admin service: orchestrates the HTTP commands and emits events.

use std::sync::Arc;

use crate::domain::{AdminEvent, Broadcaster, CredentialVerifier, StoreRecord, StoreRegistry};
use crate::error::GatewayError;

/// Orchestration layer for every admin command.
///
/// Owns the [`StoreRegistry`], the [`Broadcaster`] and the
/// [`CredentialVerifier`]. Mutations follow the pattern: validate → mutate
/// registry → broadcast → return.
#[derive(Debug, Clone)]
pub struct AdminService {
    registry: Arc<StoreRegistry>,
    broadcaster: Arc<Broadcaster>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AdminService {
    /// Creates a new `AdminService`.
    #[must_use]
    pub fn new(
        registry: Arc<StoreRegistry>,
        broadcaster: Arc<Broadcaster>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            registry,
            broadcaster,
            verifier,
        }
    }

    /// Returns a reference to the inner [`Broadcaster`].
    #[must_use]
    pub fn broadcaster(&self) -> &Arc<Broadcaster> {
        &self.broadcaster
    }

    /// Returns a reference to the inner [`StoreRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<StoreRegistry> {
        &self.registry
    }

    /// Checks an admin login.
    ///
    /// Absent fields count as a mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] unless the verifier accepts
    /// the pair.
    pub fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), GatewayError> {
        match (username, password) {
            (Some(user), Some(pass)) if self.verifier.verify(user, pass) => {
                tracing::info!("admin login granted");
                Ok(())
            }
            _ => {
                tracing::info!("admin login denied");
                Err(GatewayError::Unauthorized)
            }
        }
    }

    /// Broadcasts a notification to every connected admin session.
    ///
    /// Returns the number of sessions the notification was queued for.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BadRequest`] if the message is absent or
    /// empty; nothing is broadcast in that case.
    pub async fn push_notification(&self, message: Option<&str>) -> Result<usize, GatewayError> {
        let message = message.filter(|m| !m.is_empty()).ok_or_else(|| {
            GatewayError::BadRequest("Notification message cannot be empty".to_string())
        })?;

        let delivered = self
            .broadcaster
            .broadcast(AdminEvent::admin_response(message))
            .await;
        tracing::info!(delivered, "notification pushed");
        Ok(delivered)
    }

    /// Appends a store record and announces it on the admin channel.
    pub async fn create_store(&self, record: StoreRecord) -> StoreRecord {
        let stored = self.registry.append(record).await;
        let delivered = self
            .broadcaster
            .broadcast(AdminEvent::StoreCreated(stored.clone()))
            .await;
        tracing::info!(delivered, "store created");
        stored
    }

    /// Returns every store in creation order.
    pub async fn list_stores(&self) -> Vec<StoreRecord> {
        self.registry.list().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::StaticCredentials;
    use serde_json::json;

    fn make_service() -> AdminService {
        AdminService::new(
            Arc::new(StoreRegistry::new()),
            Arc::new(Broadcaster::default()),
            Arc::new(StaticCredentials::default()),
        )
    }

    #[test]
    fn authenticate_accepts_default_pair() {
        let service = make_service();
        assert!(service.authenticate(Some("1"), Some("1")).is_ok());
    }

    #[test]
    fn authenticate_rejects_mismatch_and_missing_fields() {
        let service = make_service();
        for (user, pass) in [
            (Some("1"), Some("0")),
            (Some("admin"), Some("1")),
            (None, Some("1")),
            (Some("1"), None),
            (None, None),
        ] {
            assert_eq!(
                service.authenticate(user, pass),
                Err(GatewayError::Unauthorized)
            );
        }
    }

    #[tokio::test]
    async fn empty_notification_is_rejected_without_broadcast() {
        let service = make_service();
        let (_, mut rx) = service.broadcaster().register().await;

        for message in [None, Some("")] {
            let result = service.push_notification(message).await;
            let Err(GatewayError::BadRequest(_)) = result else {
                panic!("expected BadRequest, got {result:?}");
            };
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn notification_reaches_every_session_once() {
        let service = make_service();
        let (_, mut rx1) = service.broadcaster().register().await;
        let (_, mut rx2) = service.broadcaster().register().await;

        let Ok(delivered) = service.push_notification(Some("sale on floor 2")).await else {
            panic!("push failed");
        };
        assert_eq!(delivered, 2);

        for rx in [&mut rx1, &mut rx2] {
            let Some(event) = rx.recv().await else {
                panic!("receiver closed");
            };
            assert_eq!(event, AdminEvent::admin_response("sale on floor 2"));
            assert!(rx.try_recv().is_err());
        }
    }

    #[tokio::test]
    async fn create_store_appends_and_broadcasts() {
        let service = make_service();
        let (_, mut rx) = service.broadcaster().register().await;
        let record = StoreRecord::new(json!({"name": "X"}));

        let stored = service.create_store(record.clone()).await;
        assert_eq!(stored, record);
        assert_eq!(service.registry().len().await, 1);

        let Some(event) = rx.recv().await else {
            panic!("receiver closed");
        };
        assert_eq!(event, AdminEvent::StoreCreated(record));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn list_returns_created_stores_in_order() {
        let service = make_service();
        let payloads: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|name| json!({ "name": name }))
            .collect();
        for payload in &payloads {
            service.create_store(StoreRecord::new(payload.clone())).await;
        }

        let listed: Vec<_> = service
            .list_stores()
            .await
            .into_iter()
            .map(StoreRecord::into_value)
            .collect();
        assert_eq!(listed, payloads);
    }
}
