// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end mirror testing.
//!
//! `TestHarness` assembles the production trigger registry over mock stores
//! and delivers raw change notifications through the full dispatch path, so
//! tests exercise exactly what the hosting platform would.

use std::sync::Arc;

use serde_json::Value;

use mirra_config::MirraConfig;
use mirra_core::{DocumentStore, MirraError, TreeStore};
use mirra_sync::{StoreHandles, TriggerRegistry, default_registry};

use crate::mock_document_store::MockDocumentStore;
use crate::mock_tree_store::MockTreeStore;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    mirror_root: String,
    notifications_collection: String,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        let defaults = MirraConfig::default();
        Self {
            mirror_root: defaults.tree_store.mirror_root,
            notifications_collection: defaults.document_store.notifications_collection,
        }
    }

    /// Override the tree-store root under which mirrors are written.
    pub fn with_mirror_root(mut self, root: impl Into<String>) -> Self {
        self.mirror_root = root.into();
        self
    }

    /// Override the collection receiving warning notifications.
    pub fn with_notifications_collection(mut self, collection: impl Into<String>) -> Self {
        self.notifications_collection = collection.into();
        self
    }

    /// Build the test harness: mock stores wired into the production
    /// trigger registry.
    pub fn build(self) -> Result<TestHarness, MirraError> {
        let document = Arc::new(MockDocumentStore::new());
        let tree = Arc::new(MockTreeStore::new());

        let mut config = MirraConfig::default();
        config.tree_store.mirror_root = self.mirror_root;
        config.document_store.notifications_collection = self.notifications_collection;

        let handles = StoreHandles::new(
            document.clone() as Arc<dyn DocumentStore>,
            tree.clone() as Arc<dyn TreeStore>,
        );
        let registry = default_registry(&handles, &config)?;

        Ok(TestHarness {
            document,
            tree,
            registry,
        })
    }
}

/// A complete mirror stack over mock stores.
pub struct TestHarness {
    pub document: Arc<MockDocumentStore>,
    pub tree: Arc<MockTreeStore>,
    registry: TriggerRegistry,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Build a harness with production defaults.
    pub fn new() -> Result<Self, MirraError> {
        Self::builder().build()
    }

    /// Deliver one raw change notification through the trigger registry.
    /// Returns the number of handlers invoked.
    pub async fn deliver(
        &self,
        path: &str,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Result<usize, MirraError> {
        self.registry.dispatch(path, before, after).await
    }

    /// The assembled registry, for tests that inspect bindings directly.
    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }
}
