//! Core data model definitions shared across Cinestream crates.
#![allow(missing_docs)]

pub mod error;
pub mod filters;
pub mod format;
pub mod ids;
pub mod movie;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filters::{FilterOptions, MovieFilters, SortBy, SortOrder};
pub use format::{format_duration, progress_fraction, timestamp_to_seconds};
pub use ids::MovieID;
pub use movie::{MovieRecord, NewMovie, build_search_terms};
