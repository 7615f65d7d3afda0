//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they only depend on
//! domain ports and stay testable without I/O. The update ownership policy
//! lives inside the blog service; the HTTP layer never branches on it.

use std::sync::Arc;

use crate::domain::ports::{BlogsCommand, BlogsQuery, LoginService, UsersCommand, UsersQuery};
use crate::domain::IdentityVerifier;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub blogs_query: Arc<dyn BlogsQuery>,
    pub blogs: Arc<dyn BlogsCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub login: Arc<dyn LoginService>,
    pub identity: IdentityVerifier,
}
