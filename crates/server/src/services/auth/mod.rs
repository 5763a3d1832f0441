//! Authentication service.
//!
//! Validates credentials, registers accounts, and gates role-restricted
//! operations. Passwords are hashed with Argon2id; handles are matched
//! exactly (case-sensitive).

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use frontino_core::{Handle, Role};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::{CurrentUser, User};

/// Authentication service.
///
/// Handles registration, login, and role checks.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new account with the `user` role.
    ///
    /// All fields are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if any field is empty after trimming.
    /// Returns `AuthError::InvalidHandle` if the handle is malformed.
    /// Returns `AuthError::HandleTaken` if the handle is already registered.
    pub async fn register(
        &self,
        name: &str,
        handle: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        self.create_with_role(name, handle, password, Role::User)
            .await
    }

    /// Create an account with an explicit role.
    ///
    /// Used by [`register`](Self::register) and by the CLI for seeding
    /// administrator accounts.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub async fn create_with_role(
        &self,
        name: &str,
        handle: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        let handle = handle.trim();
        let password = password.trim();

        if name.is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if handle.is_empty() {
            return Err(AuthError::MissingField("handle"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let handle = Handle::parse(handle)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(name, &handle, &password_hash, role)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::HandleTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Log in with handle and password.
    ///
    /// Returns the session payload on success. An unknown handle and a wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the handle/password is wrong.
    pub async fn login(&self, handle: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let handle = Handle::parse(handle.trim()).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, password_hash) = self
            .users
            .get_with_password(&handle)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password.trim(), &password_hash)?;

        Ok(CurrentUser {
            handle: user.handle,
            role: user.role,
            name: user.name,
        })
    }
}

/// Guard for role-gated operations.
///
/// Presentation decides what to do on rejection (typically a redirect); this
/// guard only answers the authorization question.
///
/// # Errors
///
/// Returns `AuthError::AccessDenied` when there is no session user or the
/// role does not match.
pub fn require_role(user: Option<&CurrentUser>, role: Role) -> Result<(), AuthError> {
    match user {
        Some(u) if u.role == role => Ok(()),
        _ => Err(AuthError::AccessDenied),
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
