//! In-memory repository adapters.
//!
//! Records live in a `RwLock<Vec<_>>`; every port call locks once, so each
//! create/update/delete is atomic per record, matching the store contract the
//! services rely on. Natural order is insertion order.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogChanges, BlogId};
use crate::domain::ports::{BlogRepository, BlogStoreError, UserRepository, UserStoreError};
use crate::domain::user::{User, UserId};

const POISONED: &str = "store lock poisoned";

/// In-memory blog store.
#[derive(Debug, Default)]
pub struct MemoryBlogRepository {
    entries: RwLock<Vec<Blog>>,
}

impl MemoryBlogRepository {
    /// Fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn insert(&self, blog: &Blog) -> Result<(), BlogStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| BlogStoreError::connection(POISONED))?;
        entries.push(blog.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| BlogStoreError::connection(POISONED))?;
        Ok(entries.iter().find(|blog| blog.id() == id).cloned())
    }

    async fn update(
        &self,
        id: &BlogId,
        changes: &BlogChanges,
    ) -> Result<Option<Blog>, BlogStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| BlogStoreError::connection(POISONED))?;
        let Some(blog) = entries.iter_mut().find(|blog| blog.id() == id) else {
            return Ok(None);
        };
        blog.apply(changes);
        Ok(Some(blog.clone()))
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| BlogStoreError::connection(POISONED))?;
        let before = entries.len();
        entries.retain(|blog| blog.id() != id);
        Ok(entries.len() < before)
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| BlogStoreError::connection(POISONED))?;
        Ok(entries.clone())
    }
}

/// In-memory user store enforcing username uniqueness.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserStoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserStoreError::connection(POISONED))?;
        if users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserStoreError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserStoreError::connection(POISONED))?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserStoreError::connection(POISONED))?;
        Ok(users
            .iter()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }

    async fn append_blog(
        &self,
        user_id: &UserId,
        blog_id: &BlogId,
    ) -> Result<(), UserStoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserStoreError::connection(POISONED))?;
        let Some(user) = users.iter_mut().find(|user| user.id() == user_id) else {
            return Err(UserStoreError::query(format!(
                "no user with id {user_id}"
            )));
        };
        user.record_blog(*blog_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserStoreError::connection(POISONED))?;
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::{BlogUrl, Likes, NewBlog, Title};
    use crate::domain::user::{DisplayName, Username};

    fn blog(title: &str) -> Blog {
        let draft = NewBlog::new(
            Title::new(title).expect("title"),
            None,
            BlogUrl::new("http://example.com").expect("url"),
            None,
        );
        Blog::create(BlogId::random(), draft, UserId::random())
    }

    fn user(username: &str) -> User {
        User::new(
            UserId::random(),
            Username::new(username).expect("username"),
            DisplayName::new("Arto Hellas").expect("name"),
            "$2b$10$hash",
        )
    }

    #[tokio::test]
    async fn blogs_round_trip_in_insertion_order() {
        let repo = MemoryBlogRepository::new();
        let first = blog("first");
        let second = blog("second");

        repo.insert(&first).await.expect("insert first");
        repo.insert(&second).await.expect("insert second");

        let all = repo.list_all().await.expect("list");
        assert_eq!(all, vec![first.clone(), second]);
        let found = repo.find_by_id(first.id()).await.expect("find");
        assert_eq!(found, Some(first));
    }

    #[tokio::test]
    async fn update_applies_partial_changes_in_place() {
        let repo = MemoryBlogRepository::new();
        let entry = blog("before");
        repo.insert(&entry).await.expect("insert");

        let updated = repo
            .update(
                entry.id(),
                &BlogChanges {
                    likes: Some(Likes::new(9)),
                    ..BlogChanges::default()
                },
            )
            .await
            .expect("update")
            .expect("entry exists");

        assert_eq!(updated.likes().value(), 9);
        assert_eq!(updated.title().as_ref(), "before");
    }

    #[tokio::test]
    async fn update_of_an_unknown_id_returns_none() {
        let repo = MemoryBlogRepository::new();
        let missing = repo
            .update(&BlogId::random(), &BlogChanges::default())
            .await
            .expect("update call succeeds");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let repo = MemoryBlogRepository::new();
        let entry = blog("doomed");
        repo.insert(&entry).await.expect("insert");

        assert!(repo.delete(entry.id()).await.expect("delete"));
        assert!(!repo.delete(entry.id()).await.expect("second delete"));
        assert!(repo.list_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let repo = MemoryUserRepository::new();
        repo.insert(&user("mluukkai")).await.expect("first insert");

        let err = repo
            .insert(&user("mluukkai"))
            .await
            .expect_err("duplicate must fail");
        assert!(matches!(err, UserStoreError::DuplicateUsername { .. }));
    }

    #[tokio::test]
    async fn append_blog_extends_the_authored_list() {
        let repo = MemoryUserRepository::new();
        let account = user("hellas");
        let blog_id = BlogId::random();
        repo.insert(&account).await.expect("insert");

        repo.append_blog(account.id(), &blog_id)
            .await
            .expect("append");

        let stored = repo
            .find_by_username("hellas")
            .await
            .expect("find")
            .expect("account exists");
        assert_eq!(stored.blogs(), &[blog_id]);
    }

    #[tokio::test]
    async fn append_blog_for_an_unknown_user_is_a_query_error() {
        let repo = MemoryUserRepository::new();
        let err = repo
            .append_blog(&UserId::random(), &BlogId::random())
            .await
            .expect_err("unknown user must fail");
        assert!(matches!(err, UserStoreError::Query { .. }));
    }
}
