//! Core types for Frontino.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod handle;
pub mod id;
pub mod role;

pub use handle::{Handle, HandleError};
pub use id::*;
pub use role::{Role, RoleParseError};
