// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change handler trait implemented by every mirror.

use async_trait::async_trait;

use crate::error::MirraError;
use crate::types::ChangeEvent;

/// A single-shot, stateless transform from one change event to at most one
/// downstream store operation.
///
/// Handlers hold no mutable state and may run concurrently for different
/// events, including re-deliveries of the same event (at-least-once
/// semantics); every implementation must therefore be safe to re-run.
#[async_trait]
pub trait ChangeHandler: Send + Sync + 'static {
    /// Returns the handler's name as registered with the trigger surface.
    fn name(&self) -> &str;

    /// Reacts to one change event. Completion signals success to the
    /// triggering platform; an error fails the invocation and defers to
    /// platform-level redelivery.
    async fn handle(&self, event: ChangeEvent) -> Result<(), MirraError>;
}
