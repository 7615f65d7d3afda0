//! Domain primitives, services, and ports.
//!
//! Purpose: keep every decision rule of the system (who may mutate which
//! entry, how aggregates are computed, what counts as a valid payload)
//! behind strongly typed, transport-agnostic APIs. Inbound and outbound
//! adapters depend on this module, never the other way around.

pub mod auth;
pub mod blog;
pub mod blog_service;
pub mod error;
pub mod identity;
pub mod ownership;
pub mod ports;
pub mod stats;
pub mod user;
pub mod user_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::blog::{Blog, BlogChanges, BlogId, BlogUrl, BlogValidationError, Likes, NewBlog, Title};
pub use self::blog_service::BlogService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity::{Identity, IdentityVerifier, TOKEN_MISSING_OR_INVALID};
pub use self::ownership::{OwnershipDecision, UpdateOwnershipPolicy};
pub use self::user::{DisplayName, NewUser, User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn refuse() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
