//! Blog entry data model.

use std::fmt;

use uuid::Uuid;

use crate::domain::user::UserId;

/// Validation errors returned by the blog constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    EmptyId,
    InvalidId,
    EmptyTitle,
    EmptyUrl,
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "blog id must not be empty"),
            Self::InvalidId => write!(f, "blog id must be a valid UUID"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyUrl => write!(f, "url must not be empty"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

/// Stable blog identifier assigned at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Validate and construct a [`BlogId`] from textual input.
    ///
    /// A malformed identifier is a validation failure, distinct from a lookup
    /// that finds no matching record.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BlogValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(BlogValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| BlogValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required, non-blank blog title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Validate and construct a [`Title`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, BlogValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BlogValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Required, non-blank link to the entry.
///
/// Stored verbatim; only presence is enforced, no URL grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogUrl(String);

impl BlogUrl {
    /// Validate and construct a [`BlogUrl`] from owned input.
    pub fn new(url: impl Into<String>) -> Result<Self, BlogValidationError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(BlogValidationError::EmptyUrl);
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for BlogUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BlogUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Non-negative like counter, zero when omitted on create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Likes(u64);

impl Likes {
    /// Wrap a raw counter value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Likes {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Likes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog entry.
///
/// ## Invariants
/// - `id` is assigned at creation and immutable afterwards.
/// - `owner`, once set, never changes; only title, author, url, and likes are
///   mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    id: BlogId,
    title: Title,
    author: Option<String>,
    url: BlogUrl,
    likes: Likes,
    owner: Option<UserId>,
}

impl Blog {
    /// Materialize a blog entry from a validated draft.
    pub fn create(id: BlogId, draft: NewBlog, owner: UserId) -> Self {
        let NewBlog {
            title,
            author,
            url,
            likes,
        } = draft;
        Self {
            id,
            title,
            author,
            url,
            likes,
            owner: Some(owner),
        }
    }

    /// Rebuild an entry from stored parts.
    pub fn from_parts(
        id: BlogId,
        title: Title,
        author: Option<String>,
        url: BlogUrl,
        likes: Likes,
        owner: Option<UserId>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            owner,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &BlogId {
        &self.id
    }

    /// Entry title.
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Free-form author attribution, if any.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Link to the entry.
    pub fn url(&self) -> &BlogUrl {
        &self.url
    }

    /// Like counter.
    pub fn likes(&self) -> Likes {
        self.likes
    }

    /// Identifier of the creating user, when recorded.
    pub fn owner(&self) -> Option<&UserId> {
        self.owner.as_ref()
    }

    /// Replace the mutable fields present in `changes`, leaving the rest
    /// untouched. The identifier and owner are never affected.
    pub fn apply(&mut self, changes: &BlogChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(author) = &changes.author {
            self.author = Some(author.clone());
        }
        if let Some(url) = &changes.url {
            self.url = url.clone();
        }
        if let Some(likes) = changes.likes {
            self.likes = likes;
        }
    }
}

/// Validated draft for a new blog entry.
///
/// Title and url are mandatory; the author attribution is optional and likes
/// default to zero when omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    title: Title,
    author: Option<String>,
    url: BlogUrl,
    likes: Likes,
}

impl NewBlog {
    /// Build a draft from validated components.
    pub fn new(title: Title, author: Option<String>, url: BlogUrl, likes: Option<Likes>) -> Self {
        Self {
            title,
            author,
            url,
            likes: likes.unwrap_or_default(),
        }
    }
}

/// Partial update for the mutable fields of an existing entry.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogChanges {
    pub title: Option<Title>,
    pub author: Option<String>,
    pub url: Option<BlogUrl>,
    pub likes: Option<Likes>,
}

impl BlogChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}
