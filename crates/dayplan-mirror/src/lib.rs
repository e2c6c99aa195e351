//! dayplan Mirror - Per-user JSON document mirror
//!
//! Writes a flat JSON snapshot of each user's item list next to the
//! relational store. The mirror is an export artifact: the running
//! application never reads it to serve queries, only to rebuild it
//! during incremental updates.
//!
//! ## Key Components
//!
//! - [`JsonItemMirror`] - `ItemMirror` implementation over plain files
//! - [`MirrorError`] - Error types for mirror operations
//!
//! Each user gets one document named `{user_id}_todo_items.json` inside
//! the configured mirror directory.

pub mod json_mirror;

pub use json_mirror::JsonItemMirror;

/// Errors that can occur during mirror operations
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// Failed to read or write a mirror document
    #[error("Mirror I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the item list
    #[error("Mirror serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
