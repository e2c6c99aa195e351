//! Credential repository port (driven/secondary port)
//!
//! User credential CRUD over the relational `users` table plus the
//! single session preference entry (the logged-in user id). Users are
//! never updated or deleted in-app, so the write surface is insert-only.

use crate::domain::User;

/// Port trait for user credentials and the session entry
#[async_trait::async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Inserts a new user row
    ///
    /// Fails if a user with the same id already exists (primary key
    /// violation). Duplicate pre-checks belong to the caller via
    /// [`user_exists`](Self::user_exists).
    async fn save_user(&self, user: &User) -> anyhow::Result<()>;

    /// Point lookup by user id
    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<User>>;

    /// Returns true if a user row with this id exists
    async fn user_exists(&self, user_id: &str) -> anyhow::Result<bool>;

    /// Reads the session entry: the logged-in user id, if any
    async fn logged_in_user(&self) -> anyhow::Result<Option<String>>;

    /// Writes the session entry; `None` clears it (logout)
    async fn set_logged_in_user(&self, user_id: Option<&str>) -> anyhow::Result<()>;
}
