//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::blog::BlogId;
use crate::domain::user::{User, UserId};

use super::define_adapter_error;

define_adapter_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserStoreError {
        /// Store connection could not be established.
        Connection => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "user store query failed: {message}",
        /// The username is already claimed by another account. The message
        /// carries the contested name.
        DuplicateUsername => "username {message} is already taken",
    }
}

/// Port for user storage and retrieval.
///
/// `insert` enforces the username uniqueness invariant; everything else is
/// plain lookup plus the denormalized authored-entries append.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account, rejecting duplicate usernames.
    async fn insert(&self, user: &User) -> Result<(), UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by unique login name.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;

    /// Append a created blog to the user's authored-entries list.
    ///
    /// This is an independent write issued after the blog itself has been
    /// persisted; callers decide how to handle a failure of the second write.
    async fn append_blog(&self, user_id: &UserId, blog_id: &BlogId)
        -> Result<(), UserStoreError>;

    /// Every stored user.
    async fn list_all(&self) -> Result<Vec<User>, UserStoreError>;
}

/// Empty-store fixture used by unit tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn insert(&self, _user: &User) -> Result<(), UserStoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserStoreError> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserStoreError> {
        Ok(None)
    }

    async fn append_blog(
        &self,
        _user_id: &UserId,
        _blog_id: &BlogId,
    ) -> Result<(), UserStoreError> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(Vec::new())
    }
}
