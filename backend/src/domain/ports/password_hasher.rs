//! Port for password hashing and verification.
//!
//! Hash construction and comparison are external primitives; the domain only
//! stores and forwards the opaque hash string.

use super::define_adapter_error;

define_adapter_error! {
    /// Failures raised by password hasher adapters.
    pub enum PasswordHashError {
        /// A hash could not be derived from the password.
        Hash => "password hashing failed: {message}",
        /// A stored hash could not be compared against a password.
        Verify => "password verification failed: {message}",
    }
}

/// Port for deriving and checking credential hashes.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Derive an opaque hash for storage.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}

/// Plaintext-marker hasher for unit tests; never use outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        Ok(hash == format!("plain:{password}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_hash_and_verify_agree() {
        let hash = FixturePasswordHasher.hash("sekret").expect("hash");
        assert!(FixturePasswordHasher.verify("sekret", &hash).expect("verify"));
        assert!(!FixturePasswordHasher.verify("wrong", &hash).expect("verify"));
    }
}
