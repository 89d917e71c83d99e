// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Port trait definitions for the mirra store seams.
//!
//! Both stores and every mirror handler sit behind `#[async_trait]` traits
//! for dynamic dispatch compatibility; concrete store bindings are external
//! collaborators supplied by the embedding platform.

pub mod adapter;
pub mod document;
pub mod handler;
pub mod tree;

// Re-export all traits at the traits module level for convenience.
pub use adapter::StoreAdapter;
pub use document::DocumentStore;
pub use handler::ChangeHandler;
pub use tree::TreeStore;
