//! bcrypt adapter for the password hasher port.

use bcrypt::DEFAULT_COST;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Password hasher backed by bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptPasswordHasher {
    /// Hasher with the library's default work factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with an explicit work factor. Lower costs are only appropriate
    /// for tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(password, self.cost).map_err(|error| PasswordHashError::hash(error.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password, hash).map_err(|error| PasswordHashError::verify(error.to_string()))
    }
}
