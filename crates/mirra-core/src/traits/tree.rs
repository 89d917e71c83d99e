// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree store port ("Store B").

use async_trait::async_trait;
use serde_json::Value;

use crate::error::MirraError;
use crate::traits::adapter::StoreAdapter;

/// Port to the hierarchical real-time tree store.
///
/// Slash-separated paths address nodes; a node holds either a scalar or a
/// nested object.
#[async_trait]
pub trait TreeStore: StoreAdapter {
    /// Sets the node at `path` to exactly `value`, replacing any prior
    /// content.
    async fn set(&self, path: &str, value: Value) -> Result<(), MirraError>;

    /// Removes the node at `path` entirely. Removing an absent node is not
    /// an error.
    async fn remove(&self, path: &str) -> Result<(), MirraError>;
}
