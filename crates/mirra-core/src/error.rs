// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the mirra replication workspace.

use thiserror::Error;

/// The primary error type used across all mirra store ports and handlers.
///
/// Store-operation failures are never retried locally. They propagate up as
/// invocation failure, and the hosting platform's redelivery of the same
/// change event is the sole recovery path.
#[derive(Debug, Error)]
pub enum MirraError {
    /// Transient store failures (network, timeout, throttling).
    #[error("transient store error: {message}")]
    Transient {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A store rejected a write under its access policy. Not recoverable by
    /// redelivery; requires an external configuration fix.
    #[error("permission denied: {message}")]
    Permission { message: String },

    /// Other store-reported failures (serialization, unknown path, backend bugs).
    #[error("store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A trigger fired without a path parameter its handler requires.
    #[error("missing path parameter: {name}")]
    MissingParam { name: String },

    /// Store handles were accessed before process-wide initialization.
    #[error("store handles not initialized -- call initialize() first")]
    NotInitialized,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
