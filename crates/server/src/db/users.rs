//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use frontino_core::{Handle, Role, UserId};

use super::RepositoryError;
use crate::models::user::User;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    handle: String,
    role: Role,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let handle = Handle::parse(&row.handle).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid handle in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            name: row.name,
            handle,
            role: row.role,
            created_at: row.created_at,
        })
    }
}

/// Internal row type for credential lookups.
#[derive(Debug, sqlx::FromRow)]
struct UserPasswordRow {
    id: i64,
    name: String,
    handle: String,
    password_hash: String,
    role: Role,
    created_at: DateTime<Utc>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their handle (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored handle is invalid.
    pub async fn get_by_handle(&self, handle: &Handle) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, handle, role, created_at
             FROM users
             WHERE handle = ?",
        )
        .bind(handle.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a user and their stored password hash by handle.
    ///
    /// Returns `None` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored handle is invalid.
    pub async fn get_with_password(
        &self,
        handle: &Handle,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserPasswordRow>(
            "SELECT id, name, handle, password_hash, role, created_at
             FROM users
             WHERE handle = ?",
        )
        .bind(handle.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let handle = Handle::parse(&r.handle).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid handle in database: {e}"))
        })?;

        let user = User {
            id: UserId::new(r.id),
            name: r.name,
            handle,
            role: r.role,
            created_at: r.created_at,
        };

        Ok(Some((user, r.password_hash)))
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the handle already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        handle: &Handle,
        password_hash: &str,
        role: Role,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, handle, password_hash, role)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, handle, role, created_at",
        )
        .bind(name)
        .bind(handle.as_str())
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("handle already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }
}
