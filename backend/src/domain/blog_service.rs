//! Blog entry use-case service.
//!
//! Orchestrates create/read/update/delete over the repository ports, applying
//! the ownership check before destructive actions and enriching every outward
//! entry with its owner's display name.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::blog::{Blog, BlogChanges, BlogId, NewBlog};
use crate::domain::error::Error;
use crate::domain::identity::{Identity, TOKEN_MISSING_OR_INVALID};
use crate::domain::ownership::{self, UpdateOwnershipPolicy};
use crate::domain::ports::{
    BlogOwner, BlogRepository, BlogStoreError, BlogView, BlogsCommand, BlogsQuery, UserRepository,
    UserStoreError,
};
use crate::domain::user::UserId;

/// Client-visible message for a delete attempted by a non-owner.
pub const ONLY_CREATOR_MAY_DELETE: &str = "only the blog's creator may delete it";
/// Client-visible message for an enforced update attempted by a non-owner.
pub const ONLY_CREATOR_MAY_UPDATE: &str = "only the blog's creator may update it";
/// Client-visible message for a lookup that matched no entry.
pub const BLOG_NOT_FOUND: &str = "no blog matches the requested id";

/// Blog entry service implementing the driving ports.
#[derive(Clone)]
pub struct BlogService<B, U> {
    blogs: Arc<B>,
    users: Arc<U>,
    update_policy: UpdateOwnershipPolicy,
}

impl<B, U> BlogService<B, U> {
    /// Create a service over the given repositories with the default
    /// permissive update policy.
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self::with_update_policy(blogs, users, UpdateOwnershipPolicy::default())
    }

    /// Create a service with an explicit update ownership policy.
    pub fn with_update_policy(
        blogs: Arc<B>,
        users: Arc<U>,
        update_policy: UpdateOwnershipPolicy,
    ) -> Self {
        Self {
            blogs,
            users,
            update_policy,
        }
    }
}

impl<B, U> BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    fn map_blog_store_error(error: BlogStoreError) -> Error {
        match error {
            BlogStoreError::Connection { message } => {
                Error::service_unavailable(format!("blog store unavailable: {message}"))
            }
            BlogStoreError::Query { message } => {
                Error::internal(format!("blog store error: {message}"))
            }
        }
    }

    fn map_user_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::Connection { message } => {
                Error::service_unavailable(format!("user store unavailable: {message}"))
            }
            UserStoreError::Query { message } => {
                Error::internal(format!("user store error: {message}"))
            }
            UserStoreError::DuplicateUsername { message } => {
                Error::internal(format!("unexpected duplicate username: {message}"))
            }
        }
    }

    fn not_found() -> Error {
        Error::not_found(BLOG_NOT_FOUND)
    }

    /// Resolve the stored owner reference for outward enrichment.
    ///
    /// A dangling owner (deleted account) renders as no owner rather than
    /// failing the read.
    async fn owner_view(&self, owner: Option<&UserId>) -> Result<Option<BlogOwner>, Error> {
        let Some(owner_id) = owner else {
            return Ok(None);
        };
        let user = self
            .users
            .find_by_id(owner_id)
            .await
            .map_err(Self::map_user_store_error)?;
        Ok(user.map(|user| BlogOwner {
            id: *user.id(),
            name: user.display_name().as_ref().to_owned(),
        }))
    }

    async fn find_existing(&self, id: &BlogId) -> Result<Blog, Error> {
        self.blogs
            .find_by_id(id)
            .await
            .map_err(Self::map_blog_store_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<B, U> BlogsQuery for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn list(&self) -> Result<Vec<BlogView>, Error> {
        let blogs = self
            .blogs
            .list_all()
            .await
            .map_err(Self::map_blog_store_error)?;

        let mut views = Vec::with_capacity(blogs.len());
        for blog in &blogs {
            let owner = self.owner_view(blog.owner()).await?;
            views.push(BlogView::from_entry(blog, owner));
        }
        Ok(views)
    }
}

#[async_trait]
impl<B, U> BlogsCommand for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn create(&self, identity: Identity, draft: NewBlog) -> Result<BlogView, Error> {
        // The verifier does not touch the store, so the caller's record is
        // resolved here; a token naming a vanished account is indistinguishable
        // from an invalid one.
        let user = self
            .users
            .find_by_id(identity.user_id())
            .await
            .map_err(Self::map_user_store_error)?
            .ok_or_else(|| Error::unauthorized(TOKEN_MISSING_OR_INVALID))?;

        let blog = Blog::create(BlogId::random(), draft, *user.id());
        self.blogs
            .insert(&blog)
            .await
            .map_err(Self::map_blog_store_error)?;

        // Second, independent write. The entry stays even if the append
        // fails; the authored list drifts until reconciled.
        if let Err(error) = self.users.append_blog(user.id(), blog.id()).await {
            warn!(
                %error,
                blog_id = %blog.id(),
                user_id = %user.id(),
                "created blog was not recorded on the creating user"
            );
        }

        let owner = BlogOwner {
            id: *user.id(),
            name: user.display_name().as_ref().to_owned(),
        };
        Ok(BlogView::from_entry(&blog, Some(owner)))
    }

    async fn update(
        &self,
        caller: Option<Identity>,
        id: BlogId,
        changes: BlogChanges,
    ) -> Result<BlogView, Error> {
        if self.update_policy.is_enforced() {
            let caller =
                caller.ok_or_else(|| Error::unauthorized(TOKEN_MISSING_OR_INVALID))?;
            let existing = self.find_existing(&id).await?;
            if !ownership::decide(Some(&caller), existing.owner()).is_permitted() {
                return Err(Error::forbidden(ONLY_CREATOR_MAY_UPDATE));
            }
        }

        let updated = self
            .blogs
            .update(&id, &changes)
            .await
            .map_err(Self::map_blog_store_error)?
            .ok_or_else(Self::not_found)?;

        let owner = self.owner_view(updated.owner()).await?;
        Ok(BlogView::from_entry(&updated, owner))
    }

    async fn delete(&self, identity: Identity, id: BlogId) -> Result<(), Error> {
        let existing = self.find_existing(&id).await?;

        if !ownership::decide(Some(&identity), existing.owner()).is_permitted() {
            return Err(Error::forbidden(ONLY_CREATOR_MAY_DELETE));
        }

        let removed = self
            .blogs
            .delete(&id)
            .await
            .map_err(Self::map_blog_store_error)?;
        if !removed {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
