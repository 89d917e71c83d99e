// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirrors the active-selection reference into the tree store.
//!
//! The singleton record at `activeSelection/current` carries a `selectionId`
//! field; its value is mirrored as the scalar at
//! `{mirror_root}/activeSelection`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use mirra_core::{ChangeEvent, ChangeHandler, MirraError, TreeStore};

/// Field of the singleton record that names the active selection.
const SELECTION_FIELD: &str = "selectionId";

/// Handler for writes to the singleton active-selection record.
///
/// A record without a usable `selectionId` is left alone rather than treated
/// as a deletion: a malformed write must not clear the mirror. Only deleting
/// the record itself removes the mirrored scalar.
pub struct ActiveSelectionMirror {
    tree: Arc<dyn TreeStore>,
    mirror_root: String,
}

impl ActiveSelectionMirror {
    pub fn new(tree: Arc<dyn TreeStore>, mirror_root: impl Into<String>) -> Self {
        Self {
            tree,
            mirror_root: mirror_root.into(),
        }
    }

    fn target_path(&self) -> String {
        format!("{}/activeSelection", self.mirror_root)
    }
}

#[async_trait]
impl ChangeHandler for ActiveSelectionMirror {
    fn name(&self) -> &str {
        "active-selection-mirror"
    }

    async fn handle(&self, event: ChangeEvent) -> Result<(), MirraError> {
        let target = self.target_path();

        match &event.after {
            Some(record) => {
                let selection_id = record
                    .get(SELECTION_FIELD)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty());

                match selection_id {
                    Some(id) => {
                        self.tree
                            .set(&target, Value::String(id.to_string()))
                            .await?;
                        info!(selection_id = id, path = %target, "active selection mirrored");
                    }
                    None => {
                        debug!(path = %target, "record carries no selectionId, mirror left untouched");
                    }
                }
            }
            None => {
                self.tree.remove(&target).await?;
                info!(path = %target, "active selection removed from mirror");
            }
        }

        Ok(())
    }
}
