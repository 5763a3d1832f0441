//! Market domain types.

use chrono::{DateTime, Utc};

use frontino_core::MarketId;

/// A supermarket record (domain type).
#[derive(Debug, Clone)]
pub struct Market {
    /// Unique market ID.
    pub id: MarketId,
    /// Market name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Opening time, stored as an unvalidated display string.
    pub opens_at: String,
    /// Closing time, stored as an unvalidated display string.
    pub closes_at: String,
    /// Free-text description.
    pub description: String,
    /// Optional category used by the search filter.
    pub category: Option<String>,
    /// Optional image filename inside the image directory.
    pub image: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Field set submitted when creating or updating a market.
///
/// `category` and `image` are `None` when absent or submitted empty; an empty
/// image on update means "keep the current image".
#[derive(Debug, Clone, Default)]
pub struct MarketDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opens_at: String,
    pub closes_at: String,
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
}
