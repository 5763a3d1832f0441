//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the public URL for a stored image filename.
///
/// Usage in templates: `{{ "front.png"|image_url }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn image_url(filename: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("/images/{filename}"))
}
