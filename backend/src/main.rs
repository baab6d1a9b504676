//! Backend entry-point: wires the campaign REST endpoints and health probes.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use server::{ServerConfig, create_server};

/// Resolve the session signing key from `SESSION_KEY_FILE`.
///
/// Fails closed in release builds: an ephemeral key is only generated in
/// debug builds or when `SESSION_ALLOW_EPHEMERAL=1` is set.
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

/// Build the connection pool when `DATABASE_URL` is present.
///
/// Without it the server still starts, serving fixture-backed responses, so
/// probes and smoke tests do not require a database.
async fn load_db_pool() -> std::io::Result<Option<DbPool>> {
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;
            Ok(Some(pool))
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving fixture-backed responses");
            Ok(None)
        }
    }
}

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

    let key = load_session_key()?;

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);
    if let Some(pool) = load_db_pool().await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr(), "starting http server");
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;

    // The listener has stopped; fail liveness so orchestrators restart the
    // instance instead of routing to a dead socket.
    health_state.mark_unhealthy();
    outcome
}
