// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirrors config records from the document store into the tree store.
//!
//! Any write to `config/{record_id}` is replicated verbatim to
//! `{mirror_root}/config/{record_id}`; a delete removes the mirrored node.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use mirra_core::{ChangeEvent, ChangeHandler, MirraError, TreeStore};

/// Handler for create/update/delete of config records.
///
/// The record content is fully opaque: whatever the document store holds
/// after the write is copied as-is (full overwrite, not a merge), so the
/// mirrored node always equals the latest known source value.
pub struct ConfigMirror {
    tree: Arc<dyn TreeStore>,
    mirror_root: String,
}

impl ConfigMirror {
    pub fn new(tree: Arc<dyn TreeStore>, mirror_root: impl Into<String>) -> Self {
        Self {
            tree,
            mirror_root: mirror_root.into(),
        }
    }

    fn target_path(&self, record_id: &str) -> String {
        format!("{}/config/{}", self.mirror_root, record_id)
    }
}

#[async_trait]
impl ChangeHandler for ConfigMirror {
    fn name(&self) -> &str {
        "config-mirror"
    }

    async fn handle(&self, event: ChangeEvent) -> Result<(), MirraError> {
        let record_id = event
            .param("record_id")
            .ok_or(MirraError::MissingParam {
                name: "record_id".to_string(),
            })?
            .to_string();
        let target = self.target_path(&record_id);

        match event.after {
            Some(state) => {
                self.tree.set(&target, state).await?;
                info!(record_id, path = %target, "config record mirrored");
            }
            None => {
                self.tree.remove(&target).await?;
                info!(record_id, path = %target, "config record removed from mirror");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirra_core::PathParams;
    use mirra_test_utils::MockTreeStore;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn event_for(record_id: &str, before: Option<Value>, after: Option<Value>) -> ChangeEvent {
        let mut params = PathParams::new();
        params.insert("record_id".to_string(), record_id.to_string());
        ChangeEvent::new(before, after, params)
    }

    fn mirror(tree: &Arc<MockTreeStore>) -> ConfigMirror {
        ConfigMirror::new(tree.clone() as Arc<dyn TreeStore>, "mirror")
    }

    #[tokio::test]
    async fn create_copies_record_verbatim() {
        let tree = Arc::new(MockTreeStore::new());
        let record = json!({"name": "tomato", "days_to_harvest": 80, "nested": {"ph": 6.5}});

        mirror(&tree)
            .handle(event_for("r1", None, Some(record.clone())))
            .await
            .unwrap();

        assert_eq!(tree.value_at("mirror/config/r1").await, Some(record));
    }

    #[tokio::test]
    async fn update_overwrites_prior_mirror_state() {
        let tree = Arc::new(MockTreeStore::new());
        let handler = mirror(&tree);

        let v1 = json!({"name": "tomato", "extra": true});
        let v2 = json!({"name": "chili"});
        handler
            .handle(event_for("r1", None, Some(v1.clone())))
            .await
            .unwrap();
        handler
            .handle(event_for("r1", Some(v1), Some(v2.clone())))
            .await
            .unwrap();

        // Full overwrite: the stale `extra` field must be gone.
        assert_eq!(tree.value_at("mirror/config/r1").await, Some(v2));
    }

    #[tokio::test]
    async fn delete_removes_mirrored_node() {
        let tree = Arc::new(MockTreeStore::new());
        let handler = mirror(&tree);
        let record = json!({"name": "tomato"});

        handler
            .handle(event_for("r1", None, Some(record.clone())))
            .await
            .unwrap();
        handler
            .handle(event_for("r1", Some(record), None))
            .await
            .unwrap();

        assert!(tree.is_absent("mirror/config/r1").await);
    }

    #[tokio::test]
    async fn replaying_the_same_event_is_idempotent() {
        let tree = Arc::new(MockTreeStore::new());
        let handler = mirror(&tree);
        let record = json!({"name": "tomato"});

        handler
            .handle(event_for("r1", None, Some(record.clone())))
            .await
            .unwrap();
        let once = tree.value_at("mirror/config/r1").await;

        handler
            .handle(event_for("r1", None, Some(record)))
            .await
            .unwrap();
        assert_eq!(tree.value_at("mirror/config/r1").await, once);
        assert_eq!(tree.len().await, 1);
    }

    #[tokio::test]
    async fn records_mirror_under_their_own_ids() {
        let tree = Arc::new(MockTreeStore::new());
        let handler = mirror(&tree);

        handler
            .handle(event_for("r1", None, Some(json!({"n": 1}))))
            .await
            .unwrap();
        handler
            .handle(event_for("r2", None, Some(json!({"n": 2}))))
            .await
            .unwrap();

        assert_eq!(tree.value_at("mirror/config/r1").await, Some(json!({"n": 1})));
        assert_eq!(tree.value_at("mirror/config/r2").await, Some(json!({"n": 2})));
    }

    #[tokio::test]
    async fn missing_record_id_parameter_fails() {
        let tree = Arc::new(MockTreeStore::new());
        let event = ChangeEvent::new(None, Some(json!({})), PathParams::new());

        let result = mirror(&tree).handle(event).await;
        assert!(matches!(result, Err(MirraError::MissingParam { .. })));
    }

    fn arb_record() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z0-9]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        // Verbatim copy and idempotence over arbitrary record shapes.
        #[test]
        fn mirrored_value_equals_source(record in arb_record()) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let tree = Arc::new(MockTreeStore::new());
                let handler = mirror(&tree);

                handler
                    .handle(event_for("r1", None, Some(record.clone())))
                    .await
                    .unwrap();
                prop_assert_eq!(tree.value_at("mirror/config/r1").await, Some(record.clone()));

                handler
                    .handle(event_for("r1", None, Some(record.clone())))
                    .await
                    .unwrap();
                prop_assert_eq!(tree.value_at("mirror/config/r1").await, Some(record));
                Ok(())
            })?;
        }
    }
}
