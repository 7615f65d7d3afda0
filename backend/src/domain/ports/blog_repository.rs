//! Port abstraction for blog entry persistence adapters.
//!
//! The store is assumed to provide atomic single-document create, update, and
//! delete plus a full-scan read; nothing here spans documents.

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogChanges, BlogId};

use super::define_adapter_error;

define_adapter_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogStoreError {
        /// Store connection could not be established.
        Connection => "blog store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "blog store query failed: {message}",
    }
}

/// Port for blog entry storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Persist a freshly created entry.
    async fn insert(&self, blog: &Blog) -> Result<(), BlogStoreError>;

    /// Fetch an entry by identifier; `None` when no record matches.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError>;

    /// Apply a partial update and return the updated entry, or `None` when no
    /// record matches.
    async fn update(
        &self,
        id: &BlogId,
        changes: &BlogChanges,
    ) -> Result<Option<Blog>, BlogStoreError>;

    /// Remove an entry, reporting whether a record was actually deleted.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogStoreError>;

    /// Every stored entry, in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Blog>, BlogStoreError>;
}

/// Empty-store fixture used by unit tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBlogRepository;

#[async_trait]
impl BlogRepository for FixtureBlogRepository {
    async fn insert(&self, _blog: &Blog) -> Result<(), BlogStoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &BlogId) -> Result<Option<Blog>, BlogStoreError> {
        Ok(None)
    }

    async fn update(
        &self,
        _id: &BlogId,
        _changes: &BlogChanges,
    ) -> Result<Option<Blog>, BlogStoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: &BlogId) -> Result<bool, BlogStoreError> {
        Ok(false)
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogStoreError> {
        Ok(Vec::new())
    }
}
