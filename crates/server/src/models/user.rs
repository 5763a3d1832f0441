//! User domain types.

use chrono::{DateTime, Utc};

use frontino_core::{Handle, Role, UserId};

/// A registered account (domain type).
///
/// Accounts are created by self-registration (always with the `user` role) or
/// by seeding; there is no update or delete path.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique login handle.
    pub handle: Handle,
    /// Authorization level.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
