use crate::error::{ModelError, Result};
use crate::ids::MovieID;
use chrono::{DateTime, Utc};
use url::Url;

/// A movie document as stored in the catalog.
///
/// Field set matches what the admin console writes on upload: descriptive
/// metadata, blob paths for the stored assets, resolved download URLs, and
/// the denormalized `search_terms` used by prefix-free title search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieRecord {
    pub id: MovieID,
    pub title: String,
    pub description: String,
    pub year: u16,
    pub director: String,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub language: String,
    /// Runtime in minutes, when known.
    pub runtime: Option<u32>,
    pub quality: String,
    /// Blob store path of the video asset, e.g. `movies/{id}/video`.
    pub video_path: String,
    /// Blob store path of the poster asset; empty when no poster was uploaded.
    pub poster_path: String,
    pub video_url: Url,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub poster_url: Option<Url>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub trailer_url: Option<Url>,
    pub views: u64,
    pub rating: f32,
    /// Lowercased title tokens plus the full lowercased title.
    pub search_terms: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub date_added: DateTime<Utc>,
}

/// Validated input for creating a movie document.
///
/// Comma-separated `cast`/`tags` strings from the upload form are split and
/// trimmed here, before any asset has been stored.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub year: u16,
    pub director: String,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub language: String,
    pub runtime: Option<u32>,
    pub quality: String,
    pub trailer_url: Option<Url>,
}

impl NewMovie {
    /// Build from raw form fields. Title, description and year are required.
    #[allow(clippy::too_many_arguments)]
    pub fn from_form(
        title: &str,
        description: &str,
        year: u16,
        director: &str,
        cast: &str,
        genres: Vec<String>,
        tags: &str,
        language: &str,
        runtime: Option<u32>,
        quality: &str,
        trailer_url: Option<Url>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(ModelError::InvalidRecord("title is required".into()));
        }
        if description.trim().is_empty() {
            return Err(ModelError::InvalidRecord(
                "description is required".into(),
            ));
        }
        if year == 0 {
            return Err(ModelError::InvalidRecord("year is required".into()));
        }
        Ok(NewMovie {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            year,
            director: director.trim().to_string(),
            cast: split_list(cast),
            genres,
            tags: split_list(tags),
            language: language.to_string(),
            runtime,
            quality: quality.to_string(),
            trailer_url,
        })
    }

    /// Finalize into a catalog record once the assets are stored.
    pub fn into_record(
        self,
        id: MovieID,
        video_path: String,
        poster_path: String,
        video_url: Url,
        poster_url: Option<Url>,
    ) -> MovieRecord {
        let search_terms = build_search_terms(&self.title);
        MovieRecord {
            id,
            title: self.title,
            description: self.description,
            year: self.year,
            director: self.director,
            cast: self.cast,
            genres: self.genres,
            tags: self.tags,
            language: self.language,
            runtime: self.runtime,
            quality: self.quality,
            video_path,
            poster_path,
            video_url,
            poster_url,
            trailer_url: self.trailer_url,
            views: 0,
            rating: 0.0,
            search_terms,
            date_added: Utc::now(),
        }
    }
}

/// Lowercased title tokens plus the full lowercased title, deduplicated.
///
/// Search matches a lowercased query term against this list, so a lookup for
/// "matrix" finds "The Matrix" without substring scans over every document.
pub fn build_search_terms(title: &str) -> Vec<String> {
    let lowered = title.trim().to_lowercase();
    let mut terms: Vec<String> = lowered
        .split_whitespace()
        .map(|word| word.to_string())
        .collect();
    if !lowered.is_empty() && !terms.contains(&lowered) {
        terms.push(lowered);
    }
    terms.dedup();
    terms
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
