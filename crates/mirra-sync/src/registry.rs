// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger registration surface exposed to the hosting platform.
//!
//! A [`TriggerRegistry`] holds named bindings from path patterns to change
//! handlers. The platform delivers raw change notifications through
//! [`TriggerRegistry::dispatch`]; the registry matches the path, extracts
//! parameters, applies the creation-only filter, and awaits the handler.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use mirra_config::MirraConfig;
use mirra_core::{ChangeEvent, ChangeHandler, MirraError, PathParams, TriggerKind};

use crate::config_mirror::ConfigMirror;
use crate::selection_mirror::ActiveSelectionMirror;
use crate::stores::StoreHandles;
use crate::warning_mirror::WarningMirror;

/// Path pattern for config record writes in the document store.
pub const CONFIG_RECORD_PATTERN: &str = "config/{record_id}";
/// Path pattern for the singleton active-selection record.
pub const ACTIVE_SELECTION_PATTERN: &str = "activeSelection/current";
/// Path pattern for warning entry creations in the tree store.
pub const WARNING_ENTRY_PATTERN: &str = "warnings/{device_id}/{entry_id}";

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed trigger path pattern.
///
/// Patterns are slash-separated; a `{name}` segment matches any single path
/// segment and captures it under `name`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern string, rejecting empty segments, malformed
    /// placeholders, and duplicate parameter names.
    pub fn parse(pattern: &str) -> Result<Self, MirraError> {
        if pattern.is_empty() {
            return Err(MirraError::Config("empty trigger pattern".to_string()));
        }

        let mut segments = Vec::new();
        let mut seen_params = Vec::new();

        for part in pattern.split('/') {
            if part.is_empty() {
                return Err(MirraError::Config(format!(
                    "trigger pattern `{pattern}` contains an empty segment"
                )));
            }

            if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(MirraError::Config(format!(
                        "trigger pattern `{pattern}` contains an unnamed placeholder"
                    )));
                }
                if seen_params.contains(&name) {
                    return Err(MirraError::Config(format!(
                        "trigger pattern `{pattern}` repeats parameter `{name}`"
                    )));
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else if part.contains('{') || part.contains('}') {
                return Err(MirraError::Config(format!(
                    "trigger pattern `{pattern}` has a malformed segment `{part}`"
                )));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Matches a concrete path against this pattern, returning the captured
    /// parameters on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            if part.is_empty() {
                return None;
            }
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Some(params)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One named binding from a path pattern to a change handler.
pub struct TriggerBinding {
    pattern: PathPattern,
    kind: TriggerKind,
    handler: Arc<dyn ChangeHandler>,
}

impl TriggerBinding {
    pub fn name(&self) -> &str {
        self.handler.name()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }
}

/// The set of trigger bindings registered with the hosting platform.
#[derive(Default)]
pub struct TriggerRegistry {
    bindings: Vec<TriggerBinding>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under a path pattern. The binding is named after
    /// the handler; duplicate names are rejected.
    pub fn register(
        &mut self,
        pattern: &str,
        kind: TriggerKind,
        handler: Arc<dyn ChangeHandler>,
    ) -> Result<(), MirraError> {
        if self.bindings.iter().any(|b| b.name() == handler.name()) {
            return Err(MirraError::Config(format!(
                "trigger `{}` is already registered",
                handler.name()
            )));
        }

        self.bindings.push(TriggerBinding {
            pattern: PathPattern::parse(pattern)?,
            kind,
            handler,
        });
        Ok(())
    }

    /// Registered bindings, in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &TriggerBinding> {
        self.bindings.iter()
    }

    /// Delivers one raw change notification.
    ///
    /// Every binding whose pattern matches the path is invoked with its own
    /// [`ChangeEvent`]; a `Create` binding ignores events whose value existed
    /// before the write or is absent after it. Returns the number of handlers
    /// invoked. The first handler error fails the whole invocation, deferring
    /// to platform-level redelivery.
    pub async fn dispatch(
        &self,
        path: &str,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Result<usize, MirraError> {
        let mut invoked = 0;

        for binding in &self.bindings {
            let Some(params) = binding.pattern.matches(path) else {
                continue;
            };

            let event = ChangeEvent::new(before.clone(), after.clone(), params);

            if binding.kind == TriggerKind::Create && !event.is_create() {
                debug!(
                    trigger = binding.name(),
                    path, "skipping non-creation event for creation-only trigger"
                );
                continue;
            }

            binding.handler.handle(event).await?;
            invoked += 1;
        }

        Ok(invoked)
    }
}

/// Builds the production registry: the three mirror triggers wired to the
/// given store handles, with target paths taken from configuration.
pub fn default_registry(
    handles: &StoreHandles,
    config: &MirraConfig,
) -> Result<TriggerRegistry, MirraError> {
    let mut registry = TriggerRegistry::new();

    registry.register(
        CONFIG_RECORD_PATTERN,
        TriggerKind::Write,
        Arc::new(ConfigMirror::new(
            handles.tree.clone(),
            &config.tree_store.mirror_root,
        )),
    )?;

    registry.register(
        ACTIVE_SELECTION_PATTERN,
        TriggerKind::Write,
        Arc::new(ActiveSelectionMirror::new(
            handles.tree.clone(),
            &config.tree_store.mirror_root,
        )),
    )?;

    registry.register(
        WARNING_ENTRY_PATTERN,
        TriggerKind::Create,
        Arc::new(WarningMirror::new(
            handles.document.clone(),
            &config.document_store.notifications_collection,
        )),
    )?;

    Ok(registry)
}
