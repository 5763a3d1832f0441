//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Redirect to login, dashboard, or admin panel
//! GET  /health              - Liveness check (registered in main)
//!
//! # Auth
//! GET  /login               - Login page
//! POST /login               - Login action
//! GET  /register            - Register page
//! POST /register            - Register action
//! GET  /logout              - Logout action
//!
//! # Catalog (requires any signed-in user)
//! GET  /dashboard           - All markets plus category filter
//! GET  /search              - Filtered search (query string)
//! POST /search              - Filtered search (form)
//! GET  /detail/{id}         - Market detail
//!
//! # Admin (requires the admin role)
//! GET  /admin               - Management panel
//! GET  /admin/add           - Add form
//! POST /admin/add           - Create market
//! GET  /admin/edit/{id}     - Edit form
//! POST /admin/edit/{id}     - Update market
//! POST /admin/delete/{id}   - Delete market
//!
//! # Static
//! GET  /images/{filename}   - Catalog images (registered in main)
//! GET  /static/*            - Stylesheet and assets (registered in main)
//! ```

pub mod admin;
pub mod auth;
pub mod dashboard;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for flash message display.
///
/// Flash-style transient messages travel as short codes in the query string;
/// [`flash_message`] maps them to user-facing text at render time.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Map a flash code carried in the query string to its user-facing message.
///
/// Unknown codes render nothing, so the query string can't be used to inject
/// arbitrary text into pages.
pub(crate) fn flash_message(code: &str) -> Option<&'static str> {
    match code {
        "credentials" => Some("Incorrect handle or password"),
        "denied" => Some("Access denied. Sign in as an administrator."),
        "fields" => Some("Please fill in every field"),
        "handle" => Some("That handle cannot be used"),
        "handle_taken" => Some("That handle is already taken"),
        "registered" => Some("Account created. You can now sign in."),
        "added" => Some("Market added"),
        "updated" => Some("Market updated"),
        "deleted" => Some("Market deleted"),
        "not_found" => Some("Market not found"),
        _ => None,
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout))
}

/// Create the signed-in catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/search",
            get(dashboard::search).post(dashboard::search_form),
        )
        .route("/detail/{id}", get(dashboard::detail))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::panel))
        .route("/add", get(admin::add_page).post(admin::add))
        .route("/edit/{id}", get(admin::edit_page).post(admin::edit))
        .route("/delete/{id}", post(admin::delete))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::home))
        .merge(auth_routes())
        .merge(catalog_routes())
        .nest("/admin", admin_routes())
}
