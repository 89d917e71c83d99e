// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and well-formed store paths.

use crate::diagnostic::ConfigError;
use crate::model::MirraConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MirraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !KNOWN_LOG_LEVELS.contains(&config.runtime.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "runtime.log_level `{}` is not one of: {}",
                config.runtime.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    validate_path_component(
        "tree_store.mirror_root",
        &config.tree_store.mirror_root,
        &mut errors,
    );
    validate_path_component(
        "document_store.notifications_collection",
        &config.document_store.notifications_collection,
        &mut errors,
    );

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// A store path component must be non-empty with no leading or trailing
/// slash; segments are joined by the handlers themselves.
fn validate_path_component(key: &str, value: &str, errors: &mut Vec<ConfigError>) {
    if value.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not be empty"),
        });
        return;
    }

    if value.starts_with('/') || value.ends_with('/') {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{value}` must not start or end with `/`"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn default_config_is_valid() {
        let config = load_config_from_str("").unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config = load_config_from_str(
            r#"
            [runtime]
            log_level = "loud"
            "#,
        )
        .unwrap();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("log_level"));
    }

    #[test]
    fn slash_wrapped_mirror_root_is_rejected() {
        let config = load_config_from_str(
            r#"
            [tree_store]
            mirror_root = "/mirror/"
            "#,
        )
        .unwrap();

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_collection_collects_all_errors() {
        let config = load_config_from_str(
            r#"
            [runtime]
            log_level = "loud"

            [document_store]
            notifications_collection = ""
            "#,
        )
        .unwrap();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2, "validation must not fail fast");
    }

    #[test]
    fn nested_mirror_root_is_accepted() {
        let config = load_config_from_str(
            r#"
            [tree_store]
            mirror_root = "smartfarm/mirror"
            "#,
        )
        .unwrap();

        assert!(validate_config(&config).is_ok());
    }
}
