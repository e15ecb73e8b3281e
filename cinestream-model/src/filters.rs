use crate::movie::MovieRecord;
use std::collections::BTreeSet;

/// Sort field for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    DateAdded,
    Title,
    Year,
    Rating,
}

/// Sort direction for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    /// Newest/highest first, the default presentation order.
    #[default]
    Descending,
}

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Filter and ordering constraints for a paginated catalog listing.
#[derive(Debug, Clone, Default)]
pub struct MovieFilters {
    /// Keep only movies whose `genres` contains this genre.
    pub genre: Option<String>,
    pub year: Option<u16>,
    pub language: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page_size: Option<usize>,
}

impl MovieFilters {
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Whether a record passes every active filter.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        if let Some(genre) = &self.genre {
            if !movie.genres.iter().any(|g| g == genre) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if movie.year != year {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if &movie.language != language {
                return false;
            }
        }
        true
    }
}

/// Distinct filter values present in a set of movies, for filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Sorted ascending.
    pub genres: Vec<String>,
    /// Sorted descending, newest first.
    pub years: Vec<u16>,
    /// Sorted ascending.
    pub languages: Vec<String>,
}

impl FilterOptions {
    pub fn from_movies<'a, I>(movies: I) -> Self
    where
        I: IntoIterator<Item = &'a MovieRecord>,
    {
        let mut genres = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut languages = BTreeSet::new();
        for movie in movies {
            for genre in &movie.genres {
                genres.insert(genre.clone());
            }
            years.insert(movie.year);
            if !movie.language.is_empty() {
                languages.insert(movie.language.clone());
            }
        }
        FilterOptions {
            genres: genres.into_iter().collect(),
            years: years.into_iter().rev().collect(),
            languages: languages.into_iter().collect(),
        }
    }
}
