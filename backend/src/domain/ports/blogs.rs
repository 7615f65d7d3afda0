//! Driving ports for the blog entry use-cases.
//!
//! Inbound adapters (HTTP handlers) depend on these traits so they stay
//! testable without I/O; the blog service implements them over the
//! repository ports.

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogChanges, BlogId, NewBlog};
use crate::domain::error::Error;
use crate::domain::identity::Identity;
use crate::domain::user::UserId;

/// Owner reference attached to a blog on its way out of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogOwner {
    pub id: UserId,
    pub name: String,
}

/// Read-enriched projection of a blog entry.
///
/// This is the only shape the service hands to adapters; the store's raw
/// record never crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogView {
    pub id: BlogId,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub owner: Option<BlogOwner>,
}

impl BlogView {
    /// Project a stored entry together with its resolved owner.
    pub fn from_entry(blog: &Blog, owner: Option<BlogOwner>) -> Self {
        Self {
            id: *blog.id(),
            title: blog.title().as_ref().to_owned(),
            author: blog.author().map(str::to_owned),
            url: blog.url().as_ref().to_owned(),
            likes: blog.likes().value(),
            owner,
        }
    }
}

/// Domain use-case port for reading blogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// Every entry, enriched with its owner's display name.
    async fn list(&self) -> Result<Vec<BlogView>, Error>;
}

/// Domain use-case port for mutating blogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Create an entry owned by the authenticated caller.
    async fn create(&self, identity: Identity, draft: NewBlog) -> Result<BlogView, Error>;

    /// Replace the mutable fields present in `changes`.
    ///
    /// `caller` may be absent; whether that matters is decided by the
    /// configured update ownership policy.
    async fn update(
        &self,
        caller: Option<Identity>,
        id: BlogId,
        changes: BlogChanges,
    ) -> Result<BlogView, Error>;

    /// Delete an entry; only its owner may do so.
    async fn delete(&self, identity: Identity, id: BlogId) -> Result<(), Error>;
}
