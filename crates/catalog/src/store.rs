//! In-memory record store
//!
//! A keyed map from album id to [`Album`], shared between request handlers
//! through cheap clones of the same handle. Nothing is persisted; the
//! contents live exactly as long as the process.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::album::{seed_albums, Album};
use crate::errors::CatalogError;
use crate::Result;

/// Shared handle to the album map.
///
/// Every operation takes the lock for its own duration only, so single
/// operations are atomic but sequences of them are not.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    albums: Arc<RwLock<BTreeMap<String, Album>>>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed seed albums
    pub fn seeded() -> Self {
        let store = Self::new();
        for album in seed_albums() {
            store.put(album.id.clone(), album);
        }
        store
    }

    /// Look up an album by id
    pub fn get(&self, id: &str) -> Result<Album> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::AlbumNotFound { id: id.to_string() })
    }

    /// Insert or overwrite the album stored under `id`.
    ///
    /// Returns the album previously stored under that id, if any.
    pub fn put(&self, id: impl Into<String>, album: Album) -> Option<Album> {
        let id = id.into();
        let previous = self.write().insert(id.clone(), album);
        debug!("Stored album {} (overwrite: {})", id, previous.is_some());
        previous
    }

    /// Remove the album stored under `id`, returning it
    pub fn delete(&self, id: &str) -> Result<Album> {
        let removed = self
            .write()
            .remove(id)
            .ok_or_else(|| CatalogError::AlbumNotFound { id: id.to_string() })?;
        debug!("Deleted album {}", id);
        Ok(removed)
    }

    /// Snapshot of every stored album keyed by id
    pub fn list(&self) -> BTreeMap<String, Album> {
        self.read().clone()
    }

    /// Number of stored albums
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no albums
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No operation panics while holding the guard, so a poisoned lock still
    // protects a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Album>> {
        self.albums.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Album>> {
        self.albums.write().unwrap_or_else(PoisonError::into_inner)
    }
}
