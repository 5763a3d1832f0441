//! Market repository for database operations.
//!
//! All listings come back ordered by name ascending, which is the only order
//! the application exposes.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use frontino_core::MarketId;

use super::RepositoryError;
use crate::models::market::{Market, MarketDraft};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for market queries.
#[derive(Debug, sqlx::FromRow)]
struct MarketRow {
    id: i64,
    name: String,
    address: String,
    phone: String,
    opens_at: String,
    closes_at: String,
    description: String,
    category: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MarketRow> for Market {
    fn from(row: MarketRow) -> Self {
        Self {
            id: MarketId::new(row.id),
            name: row.name,
            address: row.address,
            phone: row.phone,
            opens_at: row.opens_at,
            closes_at: row.closes_at,
            description: row.description,
            category: row.category,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Escape SQL `LIKE` wildcards so user input always matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for market database operations.
pub struct MarketRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MarketRepository<'a> {
    /// Create a new market repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all markets, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Market>, RepositoryError> {
        let rows = sqlx::query_as::<_, MarketRow>(
            "SELECT id, name, address, phone, opens_at, closes_at, description,
                    category, image, created_at, updated_at
             FROM markets
             ORDER BY name ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Search markets by free-text query and/or exact category.
    ///
    /// The query matches case-insensitively as a substring of name, address,
    /// or description. Both filters are optional and combine with AND. The
    /// result order matches [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Market>, RepositoryError> {
        let mut sql = String::from(
            "SELECT id, name, address, phone, opens_at, closes_at, description,
                    category, image, created_at, updated_at
             FROM markets
             WHERE 1=1",
        );
        if query.is_some() {
            sql.push_str(
                " AND (name LIKE ? ESCAPE '\\'
                    OR address LIKE ? ESCAPE '\\'
                    OR description LIKE ? ESCAPE '\\')",
            );
        }
        if category.is_some() {
            sql.push_str(" AND category = ?");
        }
        sql.push_str(" ORDER BY name ASC");

        let mut q = sqlx::query_as::<_, MarketRow>(&sql);
        if let Some(needle) = query {
            let pattern = format!("%{}%", escape_like(needle));
            q = q.bind(pattern.clone()).bind(pattern.clone()).bind(pattern);
        }
        if let Some(category) = category {
            q = q.bind(category.to_owned());
        }

        let rows = q.fetch_all(self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a market by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: MarketId) -> Result<Option<Market>, RepositoryError> {
        let row = sqlx::query_as::<_, MarketRow>(
            "SELECT id, name, address, phone, opens_at, closes_at, description,
                    category, image, created_at, updated_at
             FROM markets
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a new market.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, draft: &MarketDraft) -> Result<Market, RepositoryError> {
        let row = sqlx::query_as::<_, MarketRow>(
            "INSERT INTO markets (name, address, phone, opens_at, closes_at,
                                  description, category, image)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id, name, address, phone, opens_at, closes_at, description,
                       category, image, created_at, updated_at",
        )
        .bind(&draft.name)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.opens_at)
        .bind(&draft.closes_at)
        .bind(&draft.description)
        .bind(&draft.category)
        .bind(&draft.image)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrite all fields of an existing market.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the market doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: MarketId, draft: &MarketDraft) -> Result<Market, RepositoryError> {
        let row = sqlx::query_as::<_, MarketRow>(
            "UPDATE markets
             SET name = ?, address = ?, phone = ?, opens_at = ?, closes_at = ?,
                 description = ?, category = ?, image = ?,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING id, name, address, phone, opens_at, closes_at, description,
                       category, image, created_at, updated_at",
        )
        .bind(&draft.name)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.opens_at)
        .bind(&draft.closes_at)
        .bind(&draft.description)
        .bind(&draft.category)
        .bind(&draft.image)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    /// Delete a market row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the market doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: MarketId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM markets WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// All distinct non-empty category values currently in use.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category
             FROM markets
             WHERE category IS NOT NULL AND category <> ''
             ORDER BY category ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("mercado central"), "mercado central");
    }

    #[test]
    fn escape_like_escapes_wildcards_and_backslash() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
