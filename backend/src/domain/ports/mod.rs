//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_adapter_error;

mod blog_repository;
mod blogs;
mod password_hasher;
mod token_codec;
mod user_repository;
mod users;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogStoreError, FixtureBlogRepository};
#[cfg(test)]
pub use blogs::{MockBlogsCommand, MockBlogsQuery};
pub use blogs::{BlogOwner, BlogView, BlogsCommand, BlogsQuery};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{FixturePasswordHasher, PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_codec::MockTokenCodec;
pub use token_codec::{FixtureTokenCodec, TokenClaims, TokenCodec, TokenError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserStoreError};
#[cfg(test)]
pub use users::{MockLoginService, MockUsersCommand, MockUsersQuery};
pub use users::{AuthenticatedSession, LoginService, UserView, UsersCommand, UsersQuery};
