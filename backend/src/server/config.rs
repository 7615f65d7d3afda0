//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use backend::domain::UpdateOwnershipPolicy;

/// Settings gathered at bootstrap and consumed by the server factory.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: Vec<u8>,
    pub(crate) token_ttl: Duration,
    pub(crate) update_policy: UpdateOwnershipPolicy,
}

impl ServerConfig {
    /// Bundle the bootstrap settings.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        token_secret: Vec<u8>,
        token_ttl: Duration,
        update_policy: UpdateOwnershipPolicy,
    ) -> Self {
        Self {
            bind_addr,
            token_secret,
            token_ttl,
            update_policy,
        }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
