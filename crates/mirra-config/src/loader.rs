// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mirra.toml` > `~/.config/mirra/mirra.toml` >
//! `/etc/mirra/mirra.toml` with environment variable overrides via the
//! `MIRRA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MirraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mirra/mirra.toml` (system-wide)
/// 3. `~/.config/mirra/mirra.toml` (user XDG config)
/// 4. `./mirra.toml` (local directory)
/// 5. `MIRRA_*` environment variables
pub fn load_config() -> Result<MirraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MirraConfig::default()))
        .merge(Toml::file("/etc/mirra/mirra.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("mirra/mirra.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("mirra.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<MirraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MirraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MirraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MirraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MIRRA_TREE_STORE_MIRROR_ROOT` must map
/// to `tree_store.mirror_root`, not `tree.store.mirror.root`.
fn env_provider() -> Env {
    Env::prefixed("MIRRA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MIRRA_TREE_STORE_MIRROR_ROOT -> "tree_store_mirror_root"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("runtime_", "runtime.", 1)
            .replacen("document_store_", "document_store.", 1)
            .replacen("tree_store_", "tree_store.", 1);
        mapped.into()
    })
}
