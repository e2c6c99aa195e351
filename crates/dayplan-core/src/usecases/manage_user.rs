//! User use case - registration, login, and session rules
//!
//! Registration does not pre-check for duplicates; that check belongs to
//! the calling surface via [`exists`](UserUseCase::exists), and a
//! duplicate insert simply comes back as `false`. Login compares the
//! stored secret through the injected [`SecretVerifier`], which defaults
//! to exact string equality.

use std::sync::Arc;

use tracing::warn;

use crate::domain::User;
use crate::ports::{CredentialRepository, SecretVerifier};

/// Use case for user registration, login, and session state
pub struct UserUseCase {
    credentials: Arc<dyn CredentialRepository>,
    verifier: Arc<dyn SecretVerifier>,
}

impl UserUseCase {
    /// Creates a new UserUseCase with the required dependencies
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        verifier: Arc<dyn SecretVerifier>,
    ) -> Self {
        Self {
            credentials,
            verifier,
        }
    }

    /// Registers a new user
    ///
    /// Returns false when the insert fails at the storage layer, which
    /// includes the duplicate-id case.
    pub async fn register(&self, user_id: &str, name: &str, secret: &str) -> bool {
        let user = User::new(user_id, name, secret);
        match self.credentials.save_user(&user).await {
            Ok(()) => true,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to register user");
                false
            }
        }
    }

    /// Returns true if a user with this id is already registered
    pub async fn exists(&self, user_id: &str) -> bool {
        match self.credentials.user_exists(user_id).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to check user existence");
                false
            }
        }
    }

    /// Attempts a login; false on unknown id, secret mismatch, or failure
    pub async fn login(&self, user_id: &str, secret: &str) -> bool {
        let user = match self.credentials.get_user(user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return false,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to look up user for login");
                return false;
            }
        };

        self.verifier.verify(secret, &user.password_secret)
    }

    /// Fetches a user record by id
    pub async fn get_user(&self, user_id: &str) -> Option<User> {
        match self.credentials.get_user(user_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to fetch user");
                None
            }
        }
    }

    /// Reads the logged-in user id from the session entry
    pub async fn current_user_id(&self) -> Option<String> {
        match self.credentials.logged_in_user().await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Failed to read session entry");
                None
            }
        }
    }

    /// Writes the session entry; `None` logs the user out
    pub async fn set_current_user(&self, user_id: Option<&str>) {
        if let Err(e) = self.credentials.set_logged_in_user(user_id).await {
            warn!(error = %e, "Failed to write session entry");
        }
    }
}
