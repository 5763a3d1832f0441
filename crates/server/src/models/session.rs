//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use frontino_core::{Handle, Role};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user: the
/// handle, the role used for gating, and the display name for greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's login handle.
    pub handle: Handle,
    /// User's authorization level.
    pub role: Role,
    /// User's display name.
    pub name: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
