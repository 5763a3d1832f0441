//! HTTP middleware stack for the server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, when configured)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with SQLite store)

pub mod auth;
pub mod session;

pub use auth::{OptionalUser, RequireAdmin, RequireUser, clear_session, set_current_user};
pub use session::create_session_layer;
