//! User credential record
//!
//! Users are created on registration and read on login; nothing in the
//! application updates or deletes them. The stored secret is compared
//! through the [`SecretVerifier`](crate::ports::SecretVerifier) port,
//! which by default performs plain string equality (a known weakness,
//! kept behind the port so a hashed implementation can be
//! substituted).

use serde::{Deserialize, Serialize};

/// A registered user as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User-chosen login id, primary key
    pub id: String,
    /// Display name
    pub name: String,
    /// Stored login secret (not hashed, see module docs)
    pub password_secret: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        password_secret: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password_secret: password_secret.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let user = User::new("anna", "Anna", "s3cret");
        assert_eq!(user.id, "anna");
        assert_eq!(user.name, "Anna");
        assert_eq!(user.password_secret, "s3cret");
    }

    #[test]
    fn test_equality() {
        let a = User::new("anna", "Anna", "s3cret");
        let b = User::new("anna", "Anna", "s3cret");
        let c = User::new("anna", "Anna", "S3CRET");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
