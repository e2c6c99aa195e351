//! Item mirror port (driven/secondary port)
//!
//! The mirror is a secondary per-user snapshot of the item list,
//! written alongside every relational mutation and never consulted for
//! reads in the running application; it exists as an export artifact.
//! Flat overwrite model: no incremental append, no locking, single
//! foreground writer.

use crate::domain::ToDoItem;

/// Port trait for the per-user document mirror
#[async_trait::async_trait]
pub trait ItemMirror: Send + Sync {
    /// Serializes `items` and overwrites the user's mirror document
    async fn save_items(&self, items: &[ToDoItem], user_id: &str) -> anyhow::Result<()>;

    /// Loads the user's mirror document
    ///
    /// Returns `Ok(None)` when the document is absent or corrupt;
    /// those cases are indistinguishable by contract.
    async fn load_items(&self, user_id: &str) -> anyhow::Result<Option<Vec<ToDoItem>>>;
}
