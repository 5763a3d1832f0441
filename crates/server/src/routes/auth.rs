//! Authentication route handlers.
//!
//! Handles login, registration, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use frontino_core::Role;

use crate::error::Result;
use crate::middleware::{OptionalUser, clear_session, set_current_user};
use crate::routes::{MessageQuery, flash_message};
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub handle: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub handle: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<&'static str>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Redirect `/` to wherever the visitor belongs.
pub async fn home(OptionalUser(user): OptionalUser) -> Redirect {
    match user {
        Some(u) if u.role == Role::Admin => Redirect::to("/admin"),
        Some(_) => Redirect::to("/dashboard"),
        None => Redirect::to("/login"),
    }
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.as_deref().and_then(flash_message),
        success: query.success.as_deref().and_then(flash_message),
    }
}

/// Handle login form submission.
///
/// On success the session payload is stored and the visitor lands on the
/// surface matching their role.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.auth().login(&form.handle, &form.password).await {
        Ok(user) => {
            let target = if user.role == Role::Admin {
                "/admin"
            } else {
                "/dashboard"
            };
            set_current_user(&session, &user).await?;
            Ok(Redirect::to(target).into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            Ok(Redirect::to("/login?error=credentials").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.as_deref().and_then(flash_message),
    }
}

/// Handle registration form submission.
///
/// Self-registration always creates a `user`-role account.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    match state
        .auth()
        .register(&form.name, &form.handle, &form.password)
        .await
    {
        Ok(_) => Ok(Redirect::to("/login?success=registered").into_response()),
        Err(AuthError::MissingField(_)) => {
            Ok(Redirect::to("/register?error=fields").into_response())
        }
        Err(AuthError::InvalidHandle(_)) => {
            Ok(Redirect::to("/register?error=handle").into_response())
        }
        Err(AuthError::HandleTaken) => {
            Ok(Redirect::to("/register?error=handle_taken").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Clear the session and return to the login page. Idempotent.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_session(&session).await?;
    Ok(Redirect::to("/login"))
}
