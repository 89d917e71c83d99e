// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger-driven replication between a document store and a tree store.
//!
//! Three independent, stateless change handlers each react to one path
//! pattern and perform a single write or delete against the opposite store:
//!
//! - [`ConfigMirror`]: `config/{record_id}` writes in the document store are
//!   copied verbatim to `{mirror_root}/config/{record_id}` in the tree store.
//! - [`ActiveSelectionMirror`]: the singleton `activeSelection/current`
//!   record's `selectionId` is mirrored as a scalar tree node.
//! - [`WarningMirror`]: creations under `warnings/{device_id}/{entry_id}` in
//!   the tree store are normalized and appended to a notifications
//!   collection in the document store.
//!
//! Handlers never retry: store failures fail the invocation and the hosting
//! platform's at-least-once redelivery is the sole recovery path. Data flows
//! in both directions but never in a cycle for the same path.

pub mod config_mirror;
pub mod notification;
pub mod registry;
pub mod selection_mirror;
pub mod stores;
pub mod warning_mirror;

pub use config_mirror::ConfigMirror;
pub use notification::build_notification;
pub use registry::{
    ACTIVE_SELECTION_PATTERN, CONFIG_RECORD_PATTERN, PathPattern, TriggerBinding,
    TriggerRegistry, WARNING_ENTRY_PATTERN, default_registry,
};
pub use selection_mirror::ActiveSelectionMirror;
pub use stores::{StoreHandles, handles, initialize};
pub use warning_mirror::WarningMirror;
