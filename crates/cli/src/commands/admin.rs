//! Administrator account management.

use frontino_core::Role;
use frontino_server::services::auth::AuthService;

use super::connect;

/// Create a new administrator account.
///
/// # Errors
///
/// Returns an error if validation fails, the handle is taken, or the
/// database is unreachable.
pub async fn create(
    handle: &str,
    name: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;
    let auth = AuthService::new(&pool);

    let user = auth
        .create_with_role(name, handle, password, Role::Admin)
        .await?;

    tracing::info!(handle = %user.handle, id = %user.id, "Administrator created");
    Ok(())
}
