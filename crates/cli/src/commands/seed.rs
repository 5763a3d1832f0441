//! Seed the default administrator account.
//!
//! Creates the handle `admin` with password `1234`, the account the catalog
//! ships with. A no-op when the handle already exists, so seeding is safe to
//! repeat on every deploy.

use frontino_core::Role;
use frontino_server::services::auth::{AuthError, AuthService};

use super::connect;

const ADMIN_HANDLE: &str = "admin";
const ADMIN_NAME: &str = "Administrator";
const ADMIN_PASSWORD: &str = "1234";

/// Create the default administrator if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the insert fails for
/// any reason other than the handle already existing.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;
    let auth = AuthService::new(&pool);

    match auth
        .create_with_role(ADMIN_NAME, ADMIN_HANDLE, ADMIN_PASSWORD, Role::Admin)
        .await
    {
        Ok(user) => tracing::info!(handle = %user.handle, "Administrator created"),
        Err(AuthError::HandleTaken) => {
            tracing::info!("Administrator already exists, nothing to do");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
