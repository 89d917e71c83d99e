// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the mirra replication workspace.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the mirra workspace. Store bindings and the
//! mirror handlers implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MirraError;
pub use types::{ChangeEvent, DocumentId, HealthStatus, PathParams, StoreKind, TriggerKind};

// Re-export the port traits at crate root.
pub use traits::{ChangeHandler, DocumentStore, StoreAdapter, TreeStore};
