// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across store ports and the mirror handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Parameters extracted from a trigger's path pattern, keyed by placeholder
/// name (`config/{record_id}` matched against `config/abc` yields
/// `record_id -> abc`).
pub type PathParams = BTreeMap<String, String>;

/// Unique identifier for a document appended to a document-store collection.
///
/// Assigned by the store; mirra never generates or interprets these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// A single change notification delivered by the hosting platform.
///
/// Payloads are open mappings, carried as raw [`serde_json::Value`]; no
/// schema is imposed on either side of the mirror.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Value at the path before the write, when the platform supplies it.
    pub before: Option<Value>,
    /// Value at the path after the write; `None` for deletions.
    pub after: Option<Value>,
    /// Parameters extracted from the trigger's path pattern.
    pub params: PathParams,
}

impl ChangeEvent {
    pub fn new(before: Option<Value>, after: Option<Value>, params: PathParams) -> Self {
        Self {
            before,
            after,
            params,
        }
    }

    /// True when the path had no value before this write.
    pub fn is_create(&self) -> bool {
        self.before.is_none() && self.after.is_some()
    }

    /// True when the write removed the value at the path.
    pub fn is_delete(&self) -> bool {
        self.after.is_none()
    }

    /// Looks up a path parameter by placeholder name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Identifies which of the two backing stores a port adapts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum StoreKind {
    /// The structured document store ("Store A").
    Document,
    /// The hierarchical real-time tree store ("Store B").
    Tree,
}

/// Which change classes a trigger observes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum TriggerKind {
    /// Any write: create, update, or delete.
    Write,
    /// Creation of a previously-absent value only.
    Create,
}

/// Health status reported by store adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}
