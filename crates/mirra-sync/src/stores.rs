// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide store handles.
//!
//! Trigger invocations are independent short-lived tasks; the only state they
//! share is the pair of store handles, acquired once per process and never
//! torn down. Repeated initialization is a guarded no-op, since the hosting
//! platform may load the handler module more than once.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use mirra_core::{DocumentStore, MirraError, TreeStore};

static HANDLES: OnceCell<Arc<StoreHandles>> = OnceCell::const_new();

/// Shared handles to the two stores, as handed over by the embedding
/// platform's connection setup.
pub struct StoreHandles {
    pub document: Arc<dyn DocumentStore>,
    pub tree: Arc<dyn TreeStore>,
}

impl StoreHandles {
    pub fn new(document: Arc<dyn DocumentStore>, tree: Arc<dyn TreeStore>) -> Self {
        Self { document, tree }
    }
}

/// Installs the process-wide store handles.
///
/// When handles are already installed, this is a no-op returning the existing
/// pair; the supplied adapters are dropped.
pub fn initialize(document: Arc<dyn DocumentStore>, tree: Arc<dyn TreeStore>) -> Arc<StoreHandles> {
    initialize_in(&HANDLES, document, tree)
}

/// Returns the process-wide store handles, or [`MirraError::NotInitialized`]
/// before the first [`initialize`] call.
pub fn handles() -> Result<Arc<StoreHandles>, MirraError> {
    handles_in(&HANDLES)
}

fn initialize_in(
    cell: &OnceCell<Arc<StoreHandles>>,
    document: Arc<dyn DocumentStore>,
    tree: Arc<dyn TreeStore>,
) -> Arc<StoreHandles> {
    if let Some(existing) = cell.get() {
        debug!("store handles already initialized");
        return existing.clone();
    }

    let handles = Arc::new(StoreHandles::new(document, tree));
    let _ = cell.set(handles.clone());
    // A racing initializer may have installed first; whatever the cell holds
    // is canonical.
    cell.get().cloned().unwrap_or(handles)
}

fn handles_in(cell: &OnceCell<Arc<StoreHandles>>) -> Result<Arc<StoreHandles>, MirraError> {
    cell.get().cloned().ok_or(MirraError::NotInitialized)
}
