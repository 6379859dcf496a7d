//! Ordered in-memory store registry.
//!
//! [`StoreRegistry`] owns the sequence of [`StoreRecord`]s created through
//! the HTTP surface. Appends and reads are serialized by a single
//! [`tokio::sync::RwLock`]; nothing is persisted across restarts.

use tokio::sync::RwLock;

use super::StoreRecord;

/// Append-only list of store records in insertion order.
///
/// # Concurrency
///
/// - Concurrent `list` calls proceed in parallel.
/// - `append` takes the write lock, so it is serialized against every
///   other append and read.
#[derive(Debug, Default)]
pub struct StoreRegistry {
    stores: RwLock<Vec<StoreRecord>>,
}

impl StoreRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stores: RwLock::new(Vec::new()),
        }
    }

    /// Appends a record and returns a copy of what was stored.
    pub async fn append(&self, record: StoreRecord) -> StoreRecord {
        let mut stores = self.stores.write().await;
        stores.push(record.clone());
        record
    }

    /// Returns a snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<StoreRecord> {
        self.stores.read().await.clone()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.stores.read().await.len()
    }

    /// Returns `true` if no store has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.stores.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn append_returns_stored_record() {
        let registry = StoreRegistry::new();
        let record = StoreRecord::new(json!({"name": "G42"}));
        let stored = registry.append(record.clone()).await;
        assert_eq!(stored, record);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let registry = StoreRegistry::new();
        for i in 0..5 {
            registry.append(StoreRecord::new(json!({ "seq": i }))).await;
        }

        let listed: Vec<_> = registry
            .list()
            .await
            .into_iter()
            .map(StoreRecord::into_value)
            .collect();
        let expected: Vec<_> = (0..5).map(|i| json!({ "seq": i })).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn duplicates_and_empty_records_are_accepted() {
        let registry = StoreRegistry::new();
        registry.append(StoreRecord::new(json!({}))).await;
        registry.append(StoreRecord::new(json!({}))).await;
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let registry = StoreRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.len().await, 0);

        registry.append(StoreRecord::new(json!({"name": "X"}))).await;
        assert!(!registry.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let registry = Arc::new(StoreRegistry::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.append(StoreRecord::new(json!({ "seq": i }))).await;
            }));
        }
        for handle in handles {
            let Ok(()) = handle.await else {
                panic!("append task failed");
            };
        }
        assert_eq!(registry.len().await, 32);
    }
}
