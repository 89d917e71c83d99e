// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that both store ports must implement.

use async_trait::async_trait;

use crate::error::MirraError;
use crate::types::{HealthStatus, StoreKind};

/// The base trait for mirra store adapters.
///
/// Every store port (document, tree) must implement this trait, which
/// provides identity, lifecycle, and health check capabilities. Connection
/// setup and credentials are the embedding platform's concern; an adapter is
/// handed to mirra already able to reach its backend.
#[async_trait]
pub trait StoreAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns which of the two backing stores this adapter fronts.
    fn store_kind(&self) -> StoreKind;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, MirraError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), MirraError>;
}
