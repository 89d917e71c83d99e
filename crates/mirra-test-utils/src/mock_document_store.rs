// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock document store for deterministic testing.
//!
//! `MockDocumentStore` implements `DocumentStore` over in-memory state:
//! path-addressed documents for `set`/`remove` and named append-only
//! collections. Appended documents get uuid ids, and the Realtime-Database
//! style server-timestamp sentinel `{".sv": "timestamp"}` is resolved to a
//! monotonically increasing store clock at append time.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use mirra_core::{DocumentId, DocumentStore, HealthStatus, MirraError, StoreAdapter, StoreKind};

/// An in-memory document store with named append-only collections.
pub struct MockDocumentStore {
    documents: Mutex<HashMap<String, Value>>,
    collections: Mutex<HashMap<String, Vec<(DocumentId, Value)>>>,
    clock: AtomicI64,
    fail_next_append: Mutex<Option<String>>,
}

impl MockDocumentStore {
    /// Create a new mock document store with no documents.
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            collections: Mutex::new(HashMap::new()),
            clock: AtomicI64::new(chrono::Utc::now().timestamp_millis()),
            fail_next_append: Mutex::new(None),
        }
    }

    /// Arrange for the next `append` to fail with a transient error.
    pub async fn fail_next_append(&self, message: impl Into<String>) {
        *self.fail_next_append.lock().await = Some(message.into());
    }

    /// Document currently stored at `path`, if any.
    pub async fn document_at(&self, path: &str) -> Option<Value> {
        self.documents.lock().await.get(path).cloned()
    }

    /// All documents appended to `collection`, in append order.
    pub async fn documents_in(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .await
            .get(collection)
            .map(|docs| docs.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of documents appended to `collection`.
    pub async fn appended_count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Next tick of the store clock; strictly increasing per store instance.
    fn tick(&self) -> i64 {
        self.clock.fetch_add(1, Ordering::SeqCst)
    }

    /// Replace any top-level server-timestamp sentinel field with the store
    /// clock, as the real store does at write time.
    fn resolve_sentinels(&self, mut document: Value) -> Value {
        let sentinel = self.server_timestamp();
        if let Some(fields) = document.as_object_mut() {
            for value in fields.values_mut() {
                if *value == sentinel {
                    *value = json!(self.tick());
                }
            }
        }
        document
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreAdapter for MockDocumentStore {
    fn name(&self) -> &str {
        "mock-document"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn store_kind(&self) -> StoreKind {
        StoreKind::Document
    }

    async fn health_check(&self) -> Result<HealthStatus, MirraError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MirraError> {
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn set(&self, path: &str, value: Value) -> Result<(), MirraError> {
        self.documents.lock().await.insert(path.to_string(), value);
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), MirraError> {
        self.documents.lock().await.remove(path);
        Ok(())
    }

    async fn append(&self, collection: &str, document: Value) -> Result<DocumentId, MirraError> {
        if let Some(message) = self.fail_next_append.lock().await.take() {
            return Err(MirraError::Transient {
                message,
                source: None,
            });
        }

        let id = DocumentId(format!("doc-{}", uuid::Uuid::new_v4()));
        let resolved = self.resolve_sentinels(document);
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), resolved));
        Ok(id)
    }

    fn server_timestamp(&self) -> Value {
        json!({".sv": "timestamp"})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_assigns_fresh_ids() {
        let store = MockDocumentStore::new();

        let a = store.append("n", json!({"x": 1})).await.unwrap();
        let b = store.append("n", json!({"x": 2})).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.appended_count("n").await, 2);
    }

    #[tokio::test]
    async fn sentinel_resolves_to_increasing_clock() {
        let store = MockDocumentStore::new();
        let sentinel = store.server_timestamp();

        store
            .append("n", json!({"timestamp": sentinel.clone()}))
            .await
            .unwrap();
        store
            .append("n", json!({"timestamp": sentinel}))
            .await
            .unwrap();

        let docs = store.documents_in("n").await;
        let first = docs[0]["timestamp"].as_i64().unwrap();
        let second = docs[1]["timestamp"].as_i64().unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn client_timestamps_are_left_alone() {
        let store = MockDocumentStore::new();

        store
            .append("n", json!({"timestamp": 1234, "other": "x"}))
            .await
            .unwrap();

        let docs = store.documents_in("n").await;
        assert_eq!(docs[0]["timestamp"], json!(1234));
        assert_eq!(docs[0]["other"], json!("x"));
    }

    #[tokio::test]
    async fn set_and_remove_round_trip() {
        let store = MockDocumentStore::new();

        store.set("config/r1", json!({"a": 1})).await.unwrap();
        assert_eq!(store.document_at("config/r1").await, Some(json!({"a": 1})));

        store.remove("config/r1").await.unwrap();
        assert_eq!(store.document_at("config/r1").await, None);
    }

    #[tokio::test]
    async fn injected_append_failure_fires_once() {
        let store = MockDocumentStore::new();
        store.fail_next_append("boom").await;

        let err = store.append("n", json!({})).await.unwrap_err();
        assert!(matches!(err, MirraError::Transient { .. }));
        assert_eq!(store.appended_count("n").await, 0);

        store.append("n", json!({})).await.unwrap();
        assert_eq!(store.appended_count("n").await, 1);
    }

    #[tokio::test]
    async fn adapter_identity() {
        let store = MockDocumentStore::new();
        assert_eq!(store.name(), "mock-document");
        assert_eq!(store.store_kind(), StoreKind::Document);
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
    }
}
