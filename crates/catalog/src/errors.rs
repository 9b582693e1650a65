//! Catalog errors module

use thiserror::Error;

/// Catalog-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Album not found: {id}")]
    AlbumNotFound { id: String },
}

impl CatalogError {
    /// Identifier the failed operation was looking for
    pub fn id(&self) -> &str {
        match self {
            CatalogError::AlbumNotFound { id } => id,
        }
    }
}
