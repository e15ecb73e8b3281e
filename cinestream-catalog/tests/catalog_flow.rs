//! End-to-end admin console flows against the in-memory repositories.

use async_trait::async_trait;
use mockall::mock;
use url::Url;

use cinestream_catalog::{
    BlobRepository, CatalogError, CatalogService, InMemoryBlobs, InMemoryMovies,
    Result,
};
use cinestream_model::{MovieFilters, NewMovie};

/// Route service tracing through the test harness; honors `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample_movie(title: &str) -> NewMovie {
    NewMovie::from_form(
        title,
        "A movie about testing",
        2021,
        "Jane Doe",
        "Actor One, Actor Two",
        vec!["Drama".to_string()],
        "indie",
        "English",
        Some(101),
        "HD",
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn upload_stores_assets_then_record() {
    init_tracing();
    let service = CatalogService::new(InMemoryMovies::new(), InMemoryBlobs::new());
    let record = service
        .upload_movie(sample_movie("Uploaded"), b"video-bytes", Some(b"poster"))
        .await
        .unwrap();

    assert_eq!(record.video_path, format!("movies/{}/video", record.id));
    assert_eq!(record.poster_path, format!("movies/{}/poster", record.id));
    assert!(record.poster_url.is_some());
    assert!(record.search_terms.contains(&"uploaded".to_string()));

    let fetched = service.movie(&record.id).await.unwrap();
    assert_eq!(fetched, record);
    let url = service.download_url(&record.id).await.unwrap();
    assert_eq!(url.path(), format!("/movies/{}/video", record.id));
}

#[tokio::test]
async fn delete_removes_blobs_and_record_idempotently() {
    init_tracing();
    let movies = InMemoryMovies::new();
    let blobs = InMemoryBlobs::new();
    let service = CatalogService::new(movies, blobs);
    let record = service
        .upload_movie(sample_movie("Doomed"), b"video", Some(b"poster"))
        .await
        .unwrap();

    service.delete_movie(&record.id).await.unwrap();
    assert!(matches!(
        service.movie(&record.id).await,
        Err(CatalogError::NotFound(_))
    ));
    assert!(service.download_url(&record.id).await.is_err());

    // Second delete of the same movie is a no-op.
    service.delete_movie(&record.id).await.unwrap();
}

#[tokio::test]
async fn edits_return_the_stored_record() {
    init_tracing();
    let service = CatalogService::new(InMemoryMovies::new(), InMemoryBlobs::new());
    let mut record = service
        .upload_movie(sample_movie("Draft Title"), b"video", None)
        .await
        .unwrap();

    record.description = "Updated description".to_string();
    record.rating = 4.5;
    let updated = service.update_movie(&record).await.unwrap();
    assert_eq!(updated.description, "Updated description");

    let page = service.movies(&MovieFilters::default(), None).await.unwrap();
    assert_eq!(page.items[0].rating, 4.5);
}

#[tokio::test]
async fn watching_a_movie_increments_its_view_count() {
    init_tracing();
    let service = CatalogService::new(InMemoryMovies::new(), InMemoryBlobs::new());
    let record = service
        .upload_movie(sample_movie("Popular"), b"video", None)
        .await
        .unwrap();
    assert_eq!(record.views, 0);

    let watched = service.record_view(&record.id).await.unwrap();
    assert_eq!(watched.views, 1);
    service.record_view(&record.id).await.unwrap();
    assert_eq!(service.movie(&record.id).await.unwrap().views, 2);
}

mock! {
    pub Blobs {}

    #[async_trait]
    impl BlobRepository for Blobs {
        async fn put(&self, path: &str, bytes: &[u8]) -> Result<Url>;
        async fn url(&self, path: &str) -> Result<Url>;
        async fn delete(&self, path: &str) -> Result<()>;
    }
}

#[tokio::test]
async fn poster_upload_failure_is_non_fatal() {
    init_tracing();
    let mut blobs = MockBlobs::new();
    blobs.expect_put().returning(|path, _| {
        if path.ends_with("/poster") {
            Err(CatalogError::Storage("quota exceeded".to_string()))
        } else {
            Url::parse(&format!("memory://blobs/{path}"))
                .map_err(|e| CatalogError::Storage(e.to_string()))
        }
    });

    let service = CatalogService::new(InMemoryMovies::new(), blobs);
    let record = service
        .upload_movie(sample_movie("No Poster"), b"video", Some(b"poster"))
        .await
        .unwrap();

    assert!(record.poster_url.is_none());
    assert!(record.poster_path.is_empty());
    assert!(!record.video_path.is_empty());
}

#[tokio::test]
async fn video_upload_failure_aborts_the_flow() {
    init_tracing();
    let mut blobs = MockBlobs::new();
    blobs
        .expect_put()
        .returning(|_, _| Err(CatalogError::Storage("offline".to_string())));

    let movies = InMemoryMovies::new();
    let service = CatalogService::new(movies, blobs);
    let err = service
        .upload_movie(sample_movie("Lost"), b"video", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Storage(_)));
}
