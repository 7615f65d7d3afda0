//! Backend entry-point: config from the environment, tracing, server start.

mod server;

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::web;
use rand::RngCore;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::domain::UpdateOwnershipPolicy;
use backend::inbound::http::health::HealthState;

use crate::server::{create_server, ServerConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let token_secret = load_token_secret()?;

    let token_ttl = env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

    let update_policy = if env::var("ENFORCE_UPDATE_OWNERSHIP").ok().as_deref() == Some("1") {
        UpdateOwnershipPolicy::Enforced
    } else {
        UpdateOwnershipPolicy::Permissive
    };

    let config = ServerConfig::new(
        bind_addr,
        token_secret,
        Duration::from_secs(token_ttl),
        update_policy,
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

/// Read the token signing secret, falling back to an ephemeral one where a
/// development build allows it.
fn load_token_secret() -> std::io::Result<Vec<u8>> {
    let path =
        env::var("TOKEN_SECRET_FILE").unwrap_or_else(|_| "/var/run/secrets/token_secret".into());
    match std::fs::read(&path) {
        Ok(bytes) if !bytes.is_empty() => Ok(bytes),
        Ok(_) => Err(std::io::Error::other(format!(
            "token secret at {path} is empty"
        ))),
        Err(e) => {
            let allow_dev = env::var("TOKEN_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %path, error = %e, "using ephemeral token secret (dev only)");
                let mut secret = vec![0u8; 32];
                rand::thread_rng().fill_bytes(&mut secret);
                Ok(secret)
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read token secret at {path}: {e}"
                )))
            }
        }
    }
}
