// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock tree store for deterministic testing.
//!
//! `MockTreeStore` implements `TreeStore` over an in-memory path map, with
//! assertion helpers for inspecting mirrored state and a one-shot failure
//! injector for error-path tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use mirra_core::{HealthStatus, MirraError, StoreAdapter, StoreKind, TreeStore};

/// An in-memory tree store keyed by full node path.
pub struct MockTreeStore {
    nodes: Mutex<HashMap<String, Value>>,
    fail_next: Mutex<Option<String>>,
}

impl MockTreeStore {
    /// Create a new mock tree store with no nodes.
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Arrange for the next `set` or `remove` to fail with a transient error.
    pub async fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().await = Some(message.into());
    }

    /// Value currently stored at `path`, if any.
    pub async fn value_at(&self, path: &str) -> Option<Value> {
        self.nodes.lock().await.get(path).cloned()
    }

    /// True when no value is stored at `path`.
    pub async fn is_absent(&self, path: &str) -> bool {
        !self.nodes.lock().await.contains_key(path)
    }

    /// Number of stored nodes.
    pub async fn len(&self) -> usize {
        self.nodes.lock().await.len()
    }

    /// True when the store holds no nodes at all.
    pub async fn is_empty(&self) -> bool {
        self.nodes.lock().await.is_empty()
    }

    /// Seed a node directly, bypassing the port.
    pub async fn seed(&self, path: impl Into<String>, value: Value) {
        self.nodes.lock().await.insert(path.into(), value);
    }

    async fn take_failure(&self) -> Result<(), MirraError> {
        match self.fail_next.lock().await.take() {
            Some(message) => Err(MirraError::Transient {
                message,
                source: None,
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockTreeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreAdapter for MockTreeStore {
    fn name(&self) -> &str {
        "mock-tree"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn store_kind(&self) -> StoreKind {
        StoreKind::Tree
    }

    async fn health_check(&self) -> Result<HealthStatus, MirraError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MirraError> {
        Ok(())
    }
}

#[async_trait]
impl TreeStore for MockTreeStore {
    async fn set(&self, path: &str, value: Value) -> Result<(), MirraError> {
        self.take_failure().await?;
        self.nodes.lock().await.insert(path.to_string(), value);
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), MirraError> {
        self.take_failure().await?;
        self.nodes.lock().await.remove(path);
        Ok(())
    }
}
