//! Album records and the in-memory record store
//!
//! This crate defines the album data model shared by the HTTP adapters and
//! the service binary, together with the keyed store that owns every album
//! for the lifetime of the process.

pub mod album;
pub mod errors;
pub mod store;

pub use album::{Album, AlbumFields};
pub use errors::CatalogError;
pub use store::RecordStore;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
