//! Login handle type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Handle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The input string is empty.
    #[error("handle cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("handle must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("handle cannot contain whitespace")]
    Whitespace,
}

/// A login handle.
///
/// The unique identifier a user types to sign in. Handles are matched
/// case-sensitively and are unique across all accounts.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - Must not contain whitespace
///
/// ## Examples
///
/// ```
/// use frontino_core::Handle;
///
/// // Valid handles
/// assert!(Handle::parse("admin").is_ok());
/// assert!(Handle::parse("maria.lopez_82").is_ok());
///
/// // Invalid handles
/// assert!(Handle::parse("").is_err());        // empty
/// assert!(Handle::parse("two words").is_err()); // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Maximum length of a handle.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Handle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 64 characters
    /// - Contains whitespace
    pub fn parse(s: &str) -> Result<Self, HandleError> {
        if s.is_empty() {
            return Err(HandleError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(HandleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(HandleError::Whitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Handle` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
