use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use cinestream_model::{MovieFilters, MovieID, MovieRecord};

/// Opaque resume point for paginated listings.
///
/// Holds the last movie ID of the previous page; the next page starts after
/// it in the listing's sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(pub MovieID);

/// One page of a catalog listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Resume point for the next page, when this page is non-empty.
    pub next: Option<Cursor>,
    /// Whether a follow-up request may yield more items. A final page that
    /// happens to be exactly full still reports `true`; the follow-up page
    /// comes back empty.
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            next: None,
            has_more: false,
        }
    }
}

/// Repository port for movie documents in the catalog context.
///
/// Mutations return the written record; deletes are idempotent. The backing
/// store offers last-write-wins semantics and nothing stronger.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: &MovieRecord) -> Result<MovieRecord>;
    async fn get(&self, id: &MovieID) -> Result<MovieRecord>;
    async fn update(&self, movie: &MovieRecord) -> Result<MovieRecord>;
    async fn delete(&self, id: &MovieID) -> Result<()>;

    /// Bump the view counter by one and return the updated record.
    async fn increment_views(&self, id: &MovieID) -> Result<MovieRecord>;

    /// Paginated, filtered, sorted listing.
    async fn list(
        &self,
        filters: &MovieFilters,
        cursor: Option<Cursor>,
    ) -> Result<Page<MovieRecord>>;

    /// Title search over the denormalized `search_terms`, ordered by title.
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<MovieRecord>>;
}

/// Repository port for binary assets (video files, posters).
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// Store bytes under `path` and return a fetchable URL.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<Url>;

    /// Resolve the fetch URL for an existing blob.
    async fn url(&self, path: &str) -> Result<Url>;

    /// Remove a blob. Removing a missing blob is not an error.
    async fn delete(&self, path: &str) -> Result<()>;
}
