use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, Result};
use crate::ports::{BlobRepository, Cursor, MovieRepository, Page};
use cinestream_model::{MovieFilters, MovieID, MovieRecord, NewMovie};

/// Admin console flows over the movie and blob repositories.
///
/// Owns the two ports and keeps their ordering contract in one place: assets
/// are stored before the document on upload, and removed before the document
/// on delete, so a listed record never points at a missing video.
#[derive(Debug)]
pub struct CatalogService<M, B> {
    movies: M,
    blobs: B,
}

impl<M, B> CatalogService<M, B>
where
    M: MovieRepository,
    B: BlobRepository,
{
    pub fn new(movies: M, blobs: B) -> Self {
        CatalogService { movies, blobs }
    }

    /// Upload a new movie: store the video, then the poster, then the record.
    ///
    /// A failed poster upload is logged and the movie is created without one;
    /// a failed video upload aborts the whole flow.
    pub async fn upload_movie(
        &self,
        movie: NewMovie,
        video: &[u8],
        poster: Option<&[u8]>,
    ) -> Result<MovieRecord> {
        let id = MovieID::new();
        let video_path = format!("movies/{id}/video");
        let video_url = self.blobs.put(&video_path, video).await?;

        let (poster_path, poster_url) = match poster {
            Some(bytes) => {
                let path = format!("movies/{id}/poster");
                match self.blobs.put(&path, bytes).await {
                    Ok(url) => (path, Some(url)),
                    Err(e) => {
                        warn!(%id, error = %e, "poster upload failed, continuing without poster");
                        (String::new(), None)
                    }
                }
            }
            None => (String::new(), None),
        };

        let record =
            movie.into_record(id, video_path, poster_path, video_url, poster_url);
        let created = self.movies.create(&record).await?;
        info!(%id, title = %created.title, "movie uploaded");
        Ok(created)
    }

    /// Persist edits to an existing record and return the stored version.
    pub async fn update_movie(&self, movie: &MovieRecord) -> Result<MovieRecord> {
        self.movies.update(movie).await
    }

    /// Delete a movie and its stored assets. Idempotent: deleting a movie
    /// that is already gone succeeds.
    pub async fn delete_movie(&self, id: &MovieID) -> Result<()> {
        let movie = match self.movies.get(id).await {
            Ok(movie) => movie,
            Err(CatalogError::NotFound(_)) => return Ok(()),
            Err(e) => return Err(e),
        };
        if !movie.video_path.is_empty() {
            self.blobs.delete(&movie.video_path).await?;
        }
        if !movie.poster_path.is_empty() {
            self.blobs.delete(&movie.poster_path).await?;
        }
        self.movies.delete(id).await?;
        info!(%id, title = %movie.title, "movie deleted");
        Ok(())
    }

    pub async fn movie(&self, id: &MovieID) -> Result<MovieRecord> {
        self.movies.get(id).await
    }

    /// Count one watch of a movie and return the record with the new total.
    pub async fn record_view(&self, id: &MovieID) -> Result<MovieRecord> {
        let movie = self.movies.increment_views(id).await?;
        debug!(%id, views = movie.views, "view recorded");
        Ok(movie)
    }

    pub async fn movies(
        &self,
        filters: &MovieFilters,
        cursor: Option<Cursor>,
    ) -> Result<Page<MovieRecord>> {
        self.movies.list(filters, cursor).await
    }

    pub async fn search(&self, term: &str, limit: usize) -> Result<Vec<MovieRecord>> {
        self.movies.search(term, limit).await
    }

    /// Resolve a fresh download URL for a movie's video asset.
    pub async fn download_url(&self, id: &MovieID) -> Result<Url> {
        let movie = self.movies.get(id).await?;
        self.blobs.url(&movie.video_path).await
    }
}
