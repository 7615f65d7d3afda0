//! Driving ports for the user account use-cases.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::blog::BlogId;
use crate::domain::error::Error;
use crate::domain::user::{NewUser, User, UserId};

/// Outward projection of a user account.
///
/// Deliberately omits the credential hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogId>,
}

impl UserView {
    /// Project a stored account.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: *user.id(),
            username: user.username().as_ref().to_owned(),
            name: user.display_name().as_ref().to_owned(),
            blogs: user.blogs().to_vec(),
        }
    }
}

/// A freshly authenticated caller and their signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub token: String,
    pub username: String,
    pub name: String,
}

/// Domain use-case port for listing accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered account with its authored entries.
    async fn list(&self) -> Result<Vec<UserView>, Error>;
}

/// Domain use-case port for registering accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new account with a unique username.
    async fn register(&self, new_user: NewUser) -> Result<UserView, Error>;
}

/// Domain use-case port for exchanging credentials for a token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify the credentials and issue a signed token.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedSession, Error>;
}
