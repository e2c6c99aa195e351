//! Secret verification port
//!
//! The default implementation compares the stored secret to the
//! provided one with plain string equality, no hashing. It sits behind
//! a port so a hash-based comparison can be substituted without
//! changing the use-case layer.

/// Port trait for comparing a login attempt against a stored secret
pub trait SecretVerifier: Send + Sync {
    /// Returns true when `provided` matches `stored`
    fn verify(&self, provided: &str, stored: &str) -> bool;
}

/// Exact, case-sensitive string equality
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl SecretVerifier for PlaintextVerifier {
    fn verify(&self, provided: &str, stored: &str) -> bool {
        provided == stored
    }
}
