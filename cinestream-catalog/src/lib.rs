//! Catalog bounded context for Cinestream.
//!
//! The movie catalog lives in an external document store and its assets in a
//! credentialed blob store. This crate defines the repository ports for both,
//! an in-memory reference implementation, the admin console service that
//! drives upload/edit/delete flows, search-as-you-type debouncing, and the
//! per-session admin auth context.

pub mod error;
pub mod memory;
pub mod ports;
pub mod search;
pub mod service;
pub mod session;

pub use error::{CatalogError, Result};
pub use memory::{InMemoryBlobs, InMemoryMovies};
pub use ports::{BlobRepository, Cursor, MovieRepository, Page};
pub use search::{SearchDebouncer, SearchTicket};
pub use service::CatalogService;
pub use session::{AdminSession, AdminUser, AuthProvider, SessionManager};
