//! CLI subcommands.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;

/// Connect to the database named by `FRONTINO_DATABASE_URL`.
///
/// Falls back to the server's default database file, so the CLI and the
/// server agree without any configuration.
pub(crate) async fn connect() -> Result<SqlitePool, sqlx::Error> {
    dotenvy::dotenv().ok();

    let url = std::env::var("FRONTINO_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://frontino.db".to_owned());

    frontino_server::db::create_pool(&SecretString::from(url)).await
}
