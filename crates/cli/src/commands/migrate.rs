//! Database migration command.
//!
//! Applies the migrations embedded in the server crate
//! (`crates/server/migrations/`).

use super::connect;

/// Run the schema migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    frontino_server::db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
