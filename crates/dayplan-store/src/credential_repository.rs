//! SQLite implementation of the CredentialRepository port
//!
//! Covers the `users` table and the single session entry in the
//! `preferences` table (key `logged_in_user_id`). Setting the session
//! to `None` deletes the row rather than storing an empty value.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use dayplan_core::domain::User;
use dayplan_core::ports::CredentialRepository;

/// Preference key holding the logged-in user id
const SESSION_KEY: &str = "logged_in_user_id";

/// SQLite-based implementation of the credential repository port
pub struct SqliteCredentialRepository {
    pool: SqlitePool,
}

impl SqliteCredentialRepository {
    /// Creates a new repository instance with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        password_secret: row.get("password_secret"),
    }
}

#[async_trait::async_trait]
impl CredentialRepository for SqliteCredentialRepository {
    async fn save_user(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO users (id, name, password_secret) VALUES (?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.password_secret)
            .execute(&self.pool)
            .await?;

        tracing::trace!(user_id = %user.id, "Saved user");
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn user_exists(&self, user_id: &str) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn logged_in_user(&self) -> anyhow::Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM preferences WHERE key = ?")
                .bind(SESSION_KEY)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set_logged_in_user(&self, user_id: Option<&str>) -> anyhow::Result<()> {
        match user_id {
            Some(id) => {
                sqlx::query("INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)")
                    .bind(SESSION_KEY)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                tracing::trace!(user_id = %id, "Session entry set");
            }
            None => {
                sqlx::query("DELETE FROM preferences WHERE key = ?")
                    .bind(SESSION_KEY)
                    .execute(&self.pool)
                    .await?;
                tracing::trace!("Session entry cleared");
            }
        }

        Ok(())
    }
}
