//! Session middleware configuration.
//!
//! Sets up SQLite-backed sessions using tower-sessions.

use sqlx::SqlitePool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::ServerConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "frontino_session";

/// Create the session layer with SQLite store.
///
/// The backing table is created if it does not exist. The cookie carries no
/// expiry, so the session lasts one browser session.
///
/// # Arguments
///
/// * `pool` - SQLite connection pool
/// * `config` - Server configuration (for the secure-cookie decision)
///
/// # Errors
///
/// Returns `sqlx::Error` if the session table cannot be created.
pub async fn create_session_layer(
    pool: &SqlitePool,
    config: &ServerConfig,
) -> Result<SessionManagerLayer<SqliteStore>, sqlx::Error> {
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/"))
}
