// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store port ("Store A").

use async_trait::async_trait;
use serde_json::Value;

use crate::error::MirraError;
use crate::traits::adapter::StoreAdapter;
use crate::types::DocumentId;

/// Port to the structured document store.
///
/// Collections hold documents with store-assigned ids; paths address
/// individual documents (`config/{record_id}`). All operations are atomic at
/// the single-document level.
#[async_trait]
pub trait DocumentStore: StoreAdapter {
    /// Sets the document at `path` to exactly `value`, replacing any prior
    /// content (full overwrite, not a merge).
    async fn set(&self, path: &str, value: Value) -> Result<(), MirraError>;

    /// Removes the document at `path`. Removing an absent document is not an
    /// error.
    async fn remove(&self, path: &str) -> Result<(), MirraError>;

    /// Appends `document` to the named collection under a store-generated id.
    async fn append(&self, collection: &str, document: Value) -> Result<DocumentId, MirraError>;

    /// Returns the store's server-timestamp sentinel.
    ///
    /// The sentinel is an ordinary JSON value that the store recognizes at
    /// write time and replaces with a monotonically-increasing,
    /// store-generated timestamp, distinct from any client-supplied value.
    fn server_timestamp(&self) -> Value;
}
