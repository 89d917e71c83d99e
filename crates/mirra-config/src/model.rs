// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the mirra replication workspace.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level mirra configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to values that
/// reproduce the production mirror layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MirraConfig {
    /// Process-wide runtime settings.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Document store ("Store A") settings.
    #[serde(default)]
    pub document_store: DocumentStoreConfig,

    /// Tree store ("Store B") settings.
    #[serde(default)]
    pub tree_store: TreeStoreConfig,
}

/// Process-wide runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Document store ("Store A") configuration.
///
/// Connection identity and credentials are the embedding platform's concern;
/// they are carried here as opaque strings and never interpreted by mirra.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentStoreConfig {
    /// Opaque project/deployment identifier handed through to the store
    /// binding. `None` defers entirely to the platform's ambient identity.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Collection that receives one notification document per observed
    /// warning creation.
    #[serde(default = "default_notifications_collection")]
    pub notifications_collection: String,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            notifications_collection: default_notifications_collection(),
        }
    }
}

fn default_notifications_collection() -> String {
    "notifications".to_string()
}

/// Tree store ("Store B") configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TreeStoreConfig {
    /// Opaque database URL handed through to the store binding. `None`
    /// defers entirely to the platform's ambient identity.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Root node under which all mirrored projections live
    /// (`{mirror_root}/config/{record_id}`, `{mirror_root}/activeSelection`).
    #[serde(default = "default_mirror_root")]
    pub mirror_root: String,
}

impl Default for TreeStoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            mirror_root: default_mirror_root(),
        }
    }
}

fn default_mirror_root() -> String {
    "mirror".to_string()
}
