//! SQLite implementation of the ItemRepository port
//!
//! ## Type Mapping
//!
//! | Domain Type | SQL Type | Strategy |
//! |-------------|----------|----------|
//! | item id     | TEXT     | UUID string, stored verbatim |
//! | dates       | TEXT     | fixed `"yyyy-MM-dd HH:mm"` strings, stored verbatim |
//! | Priority    | TEXT     | lowercase name; unknown values decode to `low` |
//!
//! The date columns are never parsed here; the derived status lives in
//! the domain layer.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use dayplan_core::domain::{Priority, ToDoItem};
use dayplan_core::ports::ItemRepository;

/// SQLite-based implementation of the item repository port
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Creates a new repository instance with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Reconstruct a ToDoItem from a database row
fn item_from_row(row: &SqliteRow) -> ToDoItem {
    let priority: String = row.get("priority");
    ToDoItem {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        user_id: row.get("user_id"),
        priority: Priority::from_stored(&priority),
    }
}

#[async_trait::async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn save_item(&self, item: &ToDoItem) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO items \
             (id, title, description, start_date, end_date, user_id, priority) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.start_date)
        .bind(&item.end_date)
        .bind(&item.user_id)
        .bind(item.priority.as_str())
        .execute(&self.pool)
        .await?;

        tracing::trace!(item_id = %item.id, "Saved item");
        Ok(())
    }

    async fn fetch_items(&self, user_id: &str) -> anyhow::Result<Vec<ToDoItem>> {
        let rows = sqlx::query("SELECT * FROM items WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    async fn update_item(&self, item: &ToDoItem) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE items SET \
             title = ?, description = ?, start_date = ?, end_date = ?, priority = ? \
             WHERE id = ?",
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.start_date)
        .bind(&item.end_date)
        .bind(item.priority.as_str())
        .bind(&item.id)
        .execute(&self.pool)
        .await?;

        tracing::trace!(item_id = %item.id, "Updated item");
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::trace!(item_id = %id, "Deleted item");
        Ok(())
    }

    async fn delete_all_items(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM items").execute(&self.pool).await?;

        tracing::trace!("Deleted all items");
        Ok(())
    }
}
