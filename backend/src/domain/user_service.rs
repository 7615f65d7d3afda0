//! User account use-case service: registration, listing, and login.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::error::Error;
use crate::domain::ports::{
    AuthenticatedSession, LoginService, PasswordHasher, TokenClaims, TokenCodec, UserRepository,
    UserStoreError, UserView, UsersCommand, UsersQuery,
};
use crate::domain::user::{NewUser, User, UserId};

/// Client-visible message for a rejected login.
pub const INVALID_USERNAME_OR_PASSWORD: &str = "invalid username or password";
/// Client-visible message for a registration with a taken username.
pub const USERNAME_TAKEN: &str = "username is already taken";

/// User account service implementing the driving ports.
#[derive(Clone)]
pub struct UserService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, H, T> UserService<U, H, T> {
    /// Create a service over the given repository, hasher, and token codec.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

impl<U, H, T> UserService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    fn map_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::Connection { message } => {
                Error::service_unavailable(format!("user store unavailable: {message}"))
            }
            UserStoreError::Query { message } => {
                Error::internal(format!("user store error: {message}"))
            }
            UserStoreError::DuplicateUsername { .. } => Error::conflict(USERNAME_TAKEN),
        }
    }
}

#[async_trait]
impl<U, H, T> UsersQuery for UserService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    async fn list(&self) -> Result<Vec<UserView>, Error> {
        let users = self
            .users
            .list_all()
            .await
            .map_err(Self::map_store_error)?;
        Ok(users.iter().map(UserView::from_user).collect())
    }
}

#[async_trait]
impl<U, H, T> UsersCommand for UserService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    async fn register(&self, new_user: NewUser) -> Result<UserView, Error> {
        let hash = self
            .hasher
            .hash(new_user.password())
            .map_err(|error| Error::internal(format!("could not hash password: {error}")))?;

        let user = User::new(
            UserId::random(),
            new_user.username().clone(),
            new_user.display_name().clone(),
            hash,
        );
        self.users
            .insert(&user)
            .await
            .map_err(Self::map_store_error)?;

        Ok(UserView::from_user(&user))
    }
}

#[async_trait]
impl<U, H, T> LoginService for UserService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedSession, Error> {
        let user = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Error::unauthorized(INVALID_USERNAME_OR_PASSWORD))?;

        let password_matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .map_err(|error| Error::internal(format!("could not verify password: {error}")))?;
        if !password_matches {
            return Err(Error::unauthorized(INVALID_USERNAME_OR_PASSWORD));
        }

        let claims = TokenClaims {
            subject: Some(user.id().to_string()),
            username: user.username().as_ref().to_owned(),
        };
        let token = self
            .tokens
            .issue(&claims)
            .map_err(|error| Error::internal(format!("could not issue token: {error}")))?;

        Ok(AuthenticatedSession {
            token,
            username: user.username().as_ref().to_owned(),
            name: user.display_name().as_ref().to_owned(),
        })
    }
}
