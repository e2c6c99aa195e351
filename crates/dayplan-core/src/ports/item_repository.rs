//! Item repository port (driven/secondary port)
//!
//! Pure CRUD over the relational `items` table, scoped by user id for
//! reads. The store guarantees no ordering; ordering is imposed by the
//! view layer (see [`sort_for_list`](crate::domain::sort_for_list)).
//!
//! Uses `anyhow::Result` because storage errors are adapter-specific
//! (SQLite, in-memory fakes) and don't need domain-level
//! classification; the use-case layer logs and swallows them.

use crate::domain::ToDoItem;

/// Port trait for relational to-do item storage
#[async_trait::async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item row
    ///
    /// Fails if an item with the same id already exists.
    async fn save_item(&self, item: &ToDoItem) -> anyhow::Result<()>;

    /// Returns all items belonging to `user_id`, in store order
    async fn fetch_items(&self, user_id: &str) -> anyhow::Result<Vec<ToDoItem>>;

    /// Replaces the row with the item's id with the item's fields
    ///
    /// A missing id is not an error; the update simply affects no row.
    async fn update_item(&self, item: &ToDoItem) -> anyhow::Result<()>;

    /// Deletes the row with the given id, if present
    async fn delete_item(&self, id: &str) -> anyhow::Result<()>;

    /// Deletes every item row for every user
    async fn delete_all_items(&self) -> anyhow::Result<()>;
}
