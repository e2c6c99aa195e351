//! dayplan Store - Relational persistence
//!
//! SQLite-based storage for:
//! - User credentials (`users` table)
//! - To-do items (`items` table)
//! - The session preference entry (`preferences` table)
//!
//! ## Architecture
//!
//! This crate implements the `ItemRepository` and `CredentialRepository`
//! ports from `dayplan-core` using SQLite as the storage backend. It is
//! a driven (secondary) adapter in the hexagonal architecture.
//!
//! ## Key Components
//!
//! - [`DatabasePool`] - Connection pool with migration support
//! - [`SqliteItemRepository`] - `ItemRepository` implementation
//! - [`SqliteCredentialRepository`] - `CredentialRepository` implementation
//! - [`StoreError`] - Error types for store operations
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use dayplan_store::{DatabasePool, SqliteItemRepository};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = DatabasePool::new(Path::new("/home/user/.local/share/dayplan/dayplan.sqlite3")).await?;
//! let items = SqliteItemRepository::new(pool.pool().clone());
//! // Use items as ItemRepository...
//! # Ok(())
//! # }
//! ```

pub mod credential_repository;
pub mod item_repository;
pub mod pool;

pub use credential_repository::SqliteCredentialRepository;
pub use item_repository::SqliteItemRepository;
pub use pool::DatabasePool;

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::QueryFailed(e.to_string())
    }
}
