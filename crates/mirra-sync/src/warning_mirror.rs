// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirrors warning entries from the tree store into the document store.
//!
//! Creation of `warnings/{device_id}/{entry_id}` produces exactly one
//! normalized document in the notifications collection. The trigger is
//! creation-only; updates and deletes of existing entries are never
//! observed, and re-delivery of the same creation produces a duplicate
//! document by design.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use mirra_core::{ChangeEvent, ChangeHandler, DocumentStore, MirraError};

use crate::notification::build_notification;

/// Handler for warning entry creations.
pub struct WarningMirror {
    document: Arc<dyn DocumentStore>,
    collection: String,
}

impl WarningMirror {
    pub fn new(document: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            document,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl ChangeHandler for WarningMirror {
    fn name(&self) -> &str {
        "warning-mirror"
    }

    async fn handle(&self, event: ChangeEvent) -> Result<(), MirraError> {
        let device_id = event.param("device_id").ok_or(MirraError::MissingParam {
            name: "device_id".to_string(),
        })?;
        let entry_id = event.param("entry_id").ok_or(MirraError::MissingParam {
            name: "entry_id".to_string(),
        })?;

        let Some(payload) = event.after.as_ref() else {
            warn!(device_id, entry_id, "warning creation carried no payload, nothing to mirror");
            return Ok(());
        };

        let document = build_notification(device_id, payload, self.document.server_timestamp());

        match self.document.append(&self.collection, document).await {
            Ok(document_id) => {
                info!(
                    device_id,
                    entry_id,
                    document_id = %document_id.0,
                    collection = %self.collection,
                    "warning mirrored to notifications"
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    device_id,
                    entry_id,
                    collection = %self.collection,
                    error = %err,
                    "failed to append notification"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirra_core::PathParams;
    use mirra_test_utils::MockDocumentStore;
    use serde_json::{Value, json};

    fn event_for(device_id: &str, entry_id: &str, after: Option<Value>) -> ChangeEvent {
        let mut params = PathParams::new();
        params.insert("device_id".to_string(), device_id.to_string());
        params.insert("entry_id".to_string(), entry_id.to_string());
        ChangeEvent::new(None, after, params)
    }

    fn mirror(document: &Arc<MockDocumentStore>) -> WarningMirror {
        WarningMirror::new(document.clone() as Arc<dyn DocumentStore>, "notifications")
    }

    #[tokio::test]
    async fn creation_appends_one_normalized_document() {
        let document = Arc::new(MockDocumentStore::new());

        mirror(&document)
            .handle(event_for("dev1", "e1", Some(json!({"message": "hot"}))))
            .await
            .unwrap();

        let docs = document.documents_in("notifications").await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], json!("Warning from dev1"));
        assert_eq!(docs[0]["message"], json!("hot"));
        assert_eq!(docs[0]["level"], json!("warning"));
        assert_eq!(docs[0]["sensor"], json!("dev1"));
        assert_eq!(docs[0]["source"], json!("dev1"));
        assert_eq!(docs[0]["data"], json!({"message": "hot"}));
    }

    #[tokio::test]
    async fn server_timestamp_is_resolved_at_append_time() {
        let document = Arc::new(MockDocumentStore::new());
        let handler = mirror(&document);

        handler
            .handle(event_for("dev1", "e1", Some(json!({}))))
            .await
            .unwrap();
        handler
            .handle(event_for("dev1", "e2", Some(json!({}))))
            .await
            .unwrap();

        let docs = document.documents_in("notifications").await;
        let first = docs[0]["timestamp"].as_i64().unwrap();
        let second = docs[1]["timestamp"].as_i64().unwrap();
        // Store-generated and monotonically increasing, never the sentinel.
        assert!(second > first);
    }

    #[tokio::test]
    async fn device_timestamp_is_passed_through_unresolved() {
        let document = Arc::new(MockDocumentStore::new());

        mirror(&document)
            .handle(event_for(
                "dev1",
                "e1",
                Some(json!({"device_timestamp": 1700000100})),
            ))
            .await
            .unwrap();

        let docs = document.documents_in("notifications").await;
        assert_eq!(docs[0]["timestamp"], json!(1700000100));
    }

    #[tokio::test]
    async fn redelivery_appends_a_duplicate_document() {
        let document = Arc::new(MockDocumentStore::new());
        let handler = mirror(&document);
        let event = event_for("dev1", "e1", Some(json!({"msg": "low batt"})));

        handler.handle(event.clone()).await.unwrap();
        handler.handle(event).await.unwrap();

        // No deduplication of re-delivered events by design.
        assert_eq!(document.appended_count("notifications").await, 2);
    }

    #[tokio::test]
    async fn append_failure_propagates() {
        let document = Arc::new(MockDocumentStore::new());
        document.fail_next_append("simulated outage").await;

        let result = mirror(&document)
            .handle(event_for("dev1", "e1", Some(json!({}))))
            .await;

        assert!(matches!(result, Err(MirraError::Transient { .. })));
        assert_eq!(document.appended_count("notifications").await, 0);
    }

    #[tokio::test]
    async fn missing_payload_appends_nothing() {
        let document = Arc::new(MockDocumentStore::new());

        mirror(&document)
            .handle(event_for("dev1", "e1", None))
            .await
            .unwrap();

        assert_eq!(document.appended_count("notifications").await, 0);
    }

    #[tokio::test]
    async fn missing_path_parameters_fail() {
        let document = Arc::new(MockDocumentStore::new());
        let event = ChangeEvent::new(None, Some(json!({})), PathParams::new());

        let result = mirror(&document).handle(event).await;
        assert!(matches!(result, Err(MirraError::MissingParam { .. })));
    }
}
