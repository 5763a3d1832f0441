//! Catalog service.
//!
//! Create/read/update/delete and filtered search over market records, plus
//! the image-file lifecycle tied to records: an image reference names a file
//! in the image directory, deleting a record best-effort removes its file,
//! and an empty submitted image on update keeps the stored one.

mod error;

pub use error::CatalogError;

use std::path::Path;

use sqlx::SqlitePool;

use frontino_core::MarketId;

use crate::db::RepositoryError;
use crate::db::markets::MarketRepository;
use crate::models::{Market, MarketDraft};

/// Catalog service.
pub struct CatalogService<'a> {
    markets: MarketRepository<'a>,
    image_dir: &'a Path,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, image_dir: &'a Path) -> Self {
        Self {
            markets: MarketRepository::new(pool),
            image_dir,
        }
    }

    /// All markets, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn list(&self) -> Result<Vec<Market>, CatalogError> {
        Ok(self.markets.list().await?)
    }

    /// Filtered search over the catalog.
    ///
    /// `query` matches case-insensitively as a literal substring of name,
    /// address, or description; `category` filters by exact match; the two
    /// combine with AND. Empty or absent filters impose no constraint, so
    /// `search(None, None)` is equivalent to [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Market>, CatalogError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        Ok(self.markets.search(query, category).await?)
    }

    /// Single-record lookup; an absent ID is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn get(&self, id: MarketId) -> Result<Option<Market>, CatalogError> {
        Ok(self.markets.get(id).await?)
    }

    /// Insert a new market.
    ///
    /// An empty submitted image is stored as absent. The reference is only
    /// meaningful if a matching file already exists in the image directory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the insert fails.
    pub async fn create(&self, mut draft: MarketDraft) -> Result<Market, CatalogError> {
        normalize(&mut draft);
        Ok(self.markets.insert(&draft).await?)
    }

    /// Overwrite all fields of an existing market.
    ///
    /// An empty submitted image keeps the stored reference ("keep current
    /// image" semantics); a non-empty one overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the market doesn't exist.
    /// Returns `CatalogError::Repository` for other database errors.
    pub async fn update(&self, id: MarketId, mut draft: MarketDraft) -> Result<Market, CatalogError> {
        normalize(&mut draft);

        let existing = self.markets.get(id).await?.ok_or(CatalogError::NotFound)?;
        if draft.image.is_none() {
            draft.image = existing.image;
        }

        self.markets.update(id, &draft).await.map_err(|e| match e {
            RepositoryError::NotFound => CatalogError::NotFound,
            other => CatalogError::Repository(other),
        })
    }

    /// Delete a market and best-effort remove its image file.
    ///
    /// A failure to remove the file is logged and swallowed, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the market doesn't exist.
    /// Returns `CatalogError::Repository` for other database errors.
    pub async fn delete(&self, id: MarketId) -> Result<(), CatalogError> {
        let existing = self.markets.get(id).await?.ok_or(CatalogError::NotFound)?;

        self.markets.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => CatalogError::NotFound,
            other => CatalogError::Repository(other),
        })?;

        if let Some(image) = existing.image {
            remove_image(self.image_dir, &image).await;
        }

        Ok(())
    }

    /// Distinct non-empty categories currently in use, for search filters.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.markets.categories().await?)
    }
}

/// Trim free-text fields and drop empty optionals.
fn normalize(draft: &mut MarketDraft) {
    for field in [
        &mut draft.name,
        &mut draft.address,
        &mut draft.phone,
        &mut draft.opens_at,
        &mut draft.closes_at,
        &mut draft.description,
    ] {
        *field = field.trim().to_owned();
    }

    draft.category = draft
        .category
        .take()
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty());
    draft.image = draft
        .image
        .take()
        .map(|i| i.trim().to_owned())
        .filter(|i| !i.is_empty());
}

/// Best-effort image removal; failures are logged, never surfaced.
async fn remove_image(image_dir: &Path, filename: &str) {
    let path = image_dir.join(filename);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::debug!(path = %path.display(), error = %e, "could not remove image file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing;
    use std::path::PathBuf;

    fn draft(name: &str, category: Option<&str>, image: Option<&str>) -> MarketDraft {
        MarketDraft {
            name: name.to_owned(),
            address: format!("{name} street 1"),
            phone: "555-0100".to_owned(),
            opens_at: "08:00".to_owned(),
            closes_at: "21:00".to_owned(),
            description: format!("All about {name}"),
            category: category.map(str::to_owned),
            image: image.map(str::to_owned),
        }
    }

    /// Per-test image directory under the system temp dir.
    async fn image_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("frontino-catalog-tests").join(test);
        tokio::fs::create_dir_all(&dir).await.expect("image dir");
        dir
    }

    #[tokio::test]
    async fn list_orders_by_name_ascending() {
        let pool = testing::pool().await;
        let dir = image_dir("list_orders").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog.create(draft("Zeta", None, None)).await.expect("create");
        catalog.create(draft("Alpha", None, None)).await.expect("create");

        let names: Vec<String> = catalog
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn search_without_filters_matches_list() {
        let pool = testing::pool().await;
        let dir = image_dir("search_no_filters").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog
            .create(draft("Market A", Some("grocery"), None))
            .await
            .expect("create");
        catalog
            .create(draft("Market B", Some("bakery"), None))
            .await
            .expect("create");

        let all = catalog.list().await.expect("list");
        let found = catalog.search(None, None).await.expect("search");
        assert_eq!(
            found.iter().map(|m| m.id).collect::<Vec<_>>(),
            all.iter().map(|m| m.id).collect::<Vec<_>>()
        );

        // Empty strings behave like absent filters.
        let found = catalog.search(Some("  "), Some("")).await.expect("search");
        assert_eq!(found.len(), all.len());
    }

    #[tokio::test]
    async fn search_matches_name_address_and_description() {
        let pool = testing::pool().await;
        let dir = image_dir("search_fields").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog
            .create(MarketDraft {
                name: "Central".to_owned(),
                address: "Harbor road 7".to_owned(),
                description: "Fresh fish daily".to_owned(),
                ..draft("x", None, None)
            })
            .await
            .expect("create");

        // Substring, case-insensitive, across all three text fields.
        for needle in ["cenTRAL", "harbor", "FISH"] {
            let found = catalog.search(Some(needle), None).await.expect("search");
            assert_eq!(found.len(), 1, "query {needle:?} should match");
        }

        let found = catalog.search(Some("no such thing"), None).await.expect("search");
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn category_filter_is_exact_and_ands_with_query() {
        let pool = testing::pool().await;
        let dir = image_dir("category_filter").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog
            .create(draft("Market A", Some("grocery"), None))
            .await
            .expect("create");
        catalog
            .create(draft("Market B", Some("bakery"), None))
            .await
            .expect("create");

        let found = catalog.search(None, Some("grocery")).await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|m| m.name.as_str()), Some("Market A"));

        // AND semantics: matching query but wrong category finds nothing.
        let found = catalog
            .search(Some("Market A"), Some("bakery"))
            .await
            .expect("search");
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn wildcards_in_queries_match_literally() {
        let pool = testing::pool().await;
        let dir = image_dir("wildcards").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog
            .create(draft("100% Organic", None, None))
            .await
            .expect("create");
        catalog
            .create(draft("Ordinary", None, None))
            .await
            .expect("create");

        // `%` would match anything as a raw LIKE pattern; escaped, it only
        // matches the entry that literally contains it.
        let found = catalog.search(Some("100%"), None).await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|m| m.name.as_str()), Some("100% Organic"));

        let found = catalog.search(Some("_"), None).await.expect("search");
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn create_stores_empty_image_as_absent() {
        let pool = testing::pool().await;
        let dir = image_dir("create_empty_image").await;
        let catalog = CatalogService::new(&pool, &dir);

        let market = catalog
            .create(draft("Market A", None, Some("  ")))
            .await
            .expect("create");
        assert_eq!(market.image, None);
        assert_eq!(market.category, None);
    }

    #[tokio::test]
    async fn update_with_empty_image_keeps_current_one() {
        let pool = testing::pool().await;
        let dir = image_dir("update_keep_image").await;
        let catalog = CatalogService::new(&pool, &dir);

        let market = catalog
            .create(draft("Market A", None, Some("photo.png")))
            .await
            .expect("create");

        let updated = catalog
            .update(market.id, draft("Market A renamed", None, Some("")))
            .await
            .expect("update");
        assert_eq!(updated.name, "Market A renamed");
        assert_eq!(updated.image.as_deref(), Some("photo.png"));

        let fetched = catalog.get(market.id).await.expect("get").expect("exists");
        assert_eq!(fetched.image.as_deref(), Some("photo.png"));
    }

    #[tokio::test]
    async fn update_with_new_image_overwrites() {
        let pool = testing::pool().await;
        let dir = image_dir("update_new_image").await;
        let catalog = CatalogService::new(&pool, &dir);

        let market = catalog
            .create(draft("Market A", None, Some("photo.png")))
            .await
            .expect("create");

        let updated = catalog
            .update(market.id, draft("Market A", None, Some("front.png")))
            .await
            .expect("update");
        assert_eq!(updated.image.as_deref(), Some("front.png"));
    }

    #[tokio::test]
    async fn update_missing_market_is_not_found() {
        let pool = testing::pool().await;
        let dir = image_dir("update_missing").await;
        let catalog = CatalogService::new(&pool, &dir);

        let err = catalog
            .update(MarketId::new(999), draft("Ghost", None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_row_and_image_file() {
        let pool = testing::pool().await;
        let dir = image_dir("delete_with_file").await;
        let catalog = CatalogService::new(&pool, &dir);

        let image_path = dir.join("store.png");
        tokio::fs::write(&image_path, b"png").await.expect("write image");

        let market = catalog
            .create(draft("Market A", None, Some("store.png")))
            .await
            .expect("create");

        catalog.delete(market.id).await.expect("delete");

        assert!(catalog.get(market.id).await.expect("get").is_none());
        assert!(!image_path.exists());
    }

    #[tokio::test]
    async fn delete_succeeds_when_image_file_is_missing() {
        let pool = testing::pool().await;
        let dir = image_dir("delete_without_file").await;
        let catalog = CatalogService::new(&pool, &dir);

        let market = catalog
            .create(draft("Market A", None, Some("gone.png")))
            .await
            .expect("create");

        catalog.delete(market.id).await.expect("delete");
        assert!(catalog.get(market.id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn delete_missing_market_is_not_found() {
        let pool = testing::pool().await;
        let dir = image_dir("delete_missing").await;
        let catalog = CatalogService::new(&pool, &dir);

        let err = catalog.delete(MarketId::new(999)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn categories_are_distinct_and_nonempty() {
        let pool = testing::pool().await;
        let dir = image_dir("categories").await;
        let catalog = CatalogService::new(&pool, &dir);

        catalog
            .create(draft("A", Some("grocery"), None))
            .await
            .expect("create");
        catalog
            .create(draft("B", Some("grocery"), None))
            .await
            .expect("create");
        catalog
            .create(draft("C", Some("bakery"), None))
            .await
            .expect("create");
        catalog.create(draft("D", Some(""), None)).await.expect("create");
        catalog.create(draft("E", None, None)).await.expect("create");

        let categories = catalog.categories().await.expect("categories");
        assert_eq!(categories, ["bakery", "grocery"]);
    }
}
