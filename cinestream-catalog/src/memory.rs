use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use tracing::debug;
use url::Url;

use crate::error::{CatalogError, Result};
use crate::ports::{BlobRepository, Cursor, MovieRepository, Page};
use cinestream_model::{MovieFilters, MovieID, MovieRecord, SortBy, SortOrder};

/// In-memory movie repository.
///
/// Reference implementation of [`MovieRepository`] used by tests and demos;
/// mirrors the hosted document store's query surface (filter, order, cursor
/// pagination) without any of its durability.
#[derive(Debug, Default)]
pub struct InMemoryMovies {
    movies: DashMap<MovieID, MovieRecord>,
}

impl InMemoryMovies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn sorted_snapshot(&self, filters: &MovieFilters) -> Vec<MovieRecord> {
        let mut items: Vec<MovieRecord> = self
            .movies
            .iter()
            .filter(|entry| filters.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| {
            let cmp = match filters.sort_by {
                SortBy::DateAdded => a.date_added.cmp(&b.date_added),
                SortBy::Title => a.title.cmp(&b.title),
                SortBy::Year => a.year.cmp(&b.year),
                SortBy::Rating => a.rating.total_cmp(&b.rating),
            };
            // Ties fall back to the ID so cursor pagination stays stable.
            let cmp = cmp.then_with(|| a.id.cmp(&b.id));
            match filters.sort_order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
        items
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovies {
    async fn create(&self, movie: &MovieRecord) -> Result<MovieRecord> {
        self.movies.insert(movie.id, movie.clone());
        debug!(id = %movie.id, title = %movie.title, "created movie record");
        Ok(movie.clone())
    }

    async fn get(&self, id: &MovieID) -> Result<MovieRecord> {
        self.movies
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CatalogError::NotFound(id.as_str()))
    }

    async fn update(&self, movie: &MovieRecord) -> Result<MovieRecord> {
        if !self.movies.contains_key(&movie.id) {
            return Err(CatalogError::NotFound(movie.id.as_str()));
        }
        // Last write wins, matching the backing store's guarantee.
        self.movies.insert(movie.id, movie.clone());
        Ok(movie.clone())
    }

    async fn delete(&self, id: &MovieID) -> Result<()> {
        self.movies.remove(id);
        Ok(())
    }

    async fn increment_views(&self, id: &MovieID) -> Result<MovieRecord> {
        let mut entry = self
            .movies
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.as_str()))?;
        entry.value_mut().views += 1;
        Ok(entry.value().clone())
    }

    async fn list(
        &self,
        filters: &MovieFilters,
        cursor: Option<Cursor>,
    ) -> Result<Page<MovieRecord>> {
        let items = self.sorted_snapshot(filters);
        let start = match cursor {
            Some(Cursor(after)) => match items.iter().position(|m| m.id == after) {
                Some(idx) => idx + 1,
                // Cursor no longer present (record deleted); restart from the top
                // rather than failing the listing.
                None => 0,
            },
            None => 0,
        };
        if start >= items.len() {
            return Ok(Page::empty());
        }
        let page_size = filters.page_size();
        let page: Vec<MovieRecord> =
            items.into_iter().skip(start).take(page_size).collect();
        let has_more = page.len() == page_size;
        let next = page.last().map(|m| Cursor(m.id));
        Ok(Page {
            items: page,
            next,
            has_more,
        })
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<MovieRecord>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let mut hits: Vec<MovieRecord> = self
            .movies
            .iter()
            .filter(|entry| {
                entry.value().search_terms.iter().any(|t| t == &needle)
            })
            .map(|entry| entry.value().clone())
            .collect();
        hits.sort_by(|a, b| a.title.cmp(&b.title));
        hits.truncate(limit);
        Ok(hits)
    }
}

/// In-memory blob repository keyed by path.
#[derive(Debug, Default)]
pub struct InMemoryBlobs {
    blobs: DashMap<String, Vec<u8>>,
}

impl InMemoryBlobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.blobs.contains_key(path)
    }

    fn url_for(path: &str) -> Result<Url> {
        Url::parse(&format!("memory://blobs/{path}"))
            .map_err(|e| CatalogError::Storage(e.to_string()))
    }
}

#[async_trait]
impl BlobRepository for InMemoryBlobs {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<Url> {
        self.blobs.insert(path.to_string(), bytes.to_vec());
        debug!(path, size = bytes.len(), "stored blob");
        Self::url_for(path)
    }

    async fn url(&self, path: &str) -> Result<Url> {
        if !self.blobs.contains_key(path) {
            return Err(CatalogError::NotFound(path.to_string()));
        }
        Self::url_for(path)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.blobs.remove(path);
        Ok(())
    }
}
