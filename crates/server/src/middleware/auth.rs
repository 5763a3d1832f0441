//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a signed-in user or an administrator in
//! route handlers.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use frontino_core::Role;

use crate::models::{CurrentUser, session_keys};
use crate::services::auth;

/// Extractor that requires a signed-in user (any role).
///
/// If nobody is signed in, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub CurrentUser);

/// Extractor that requires an administrator.
///
/// The role decision is `services::auth::require_role`; this extractor only
/// translates its rejection into a redirect.
pub struct RequireAdmin(pub CurrentUser);

/// Error returned when a visitor fails an auth extractor.
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// Redirect to the login page with an access-denied message.
    AccessDenied,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::AccessDenied => Redirect::to("/login?error=denied").into_response(),
        }
    }
}

/// Read the current user out of the request's session, if any.
async fn current_user(parts: &mut Parts) -> Option<CurrentUser> {
    let session = parts.extensions.get::<Session>()?;
    session.get(session_keys::CURRENT_USER).await.ok().flatten()
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_user(parts)
            .await
            .map(Self)
            .ok_or(AuthRejection::RedirectToLogin)
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(user) = current_user(parts).await else {
            return Err(AuthRejection::AccessDenied);
        };

        auth::require_role(Some(&user), Role::Admin).map_err(|_| AuthRejection::AccessDenied)?;

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireUser`, this does not reject the request when nobody is
/// signed in.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts).await))
    }
}

/// Helper to set the current user in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the whole session (logout). Idempotent.
///
/// # Errors
///
/// Returns an error if the backing store cannot be reached.
pub async fn clear_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
