//! Album request handlers
//!
//! Each handler performs exactly one record store operation and renders the
//! outcome as JSON. Path parameters arrive already extracted by the router.

use std::collections::BTreeMap;

use albums_catalog::{Album, AlbumFields, RecordStore};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::response::PrettyJson;

/// `GET /albums`: every stored album keyed by id
pub async fn list_albums(State(store): State<RecordStore>) -> PrettyJson<BTreeMap<String, Album>> {
    let albums = store.list();
    debug!("Listing {} albums", albums.len());
    PrettyJson(albums)
}

/// `POST /albums/add/:id`: store the body under the path id.
///
/// The body is decoded regardless of its declared content type. An existing
/// album with the same id is replaced.
pub async fn create_album(
    State(store): State<RecordStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Album>), ApiError> {
    let fields: AlbumFields = serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody {
        reason: e.to_string(),
    })?;

    let album = fields.into_album(id.clone());
    let replaced = store.put(id.clone(), album.clone());
    info!("Created album {} (replaced existing: {})", id, replaced.is_some());

    Ok((StatusCode::CREATED, PrettyJson(album)))
}

/// `GET /albums/:id`
pub async fn get_album(
    State(store): State<RecordStore>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Album>, ApiError> {
    let album = store.get(&id)?;
    Ok(PrettyJson(album))
}

/// `DELETE /albums/delete/:id`: remove and echo the album
pub async fn delete_album(
    State(store): State<RecordStore>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Album>, ApiError> {
    let removed = store.delete(&id)?;
    info!("Deleted album {}", id);
    Ok(PrettyJson(removed))
}

/// Fallback for paths no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use albums_catalog::CatalogError;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = RecordStore::seeded();

        let body = Bytes::from_static(br#"{"title": "X", "artist": "Y", "price": 9.99}"#);
        let (status, PrettyJson(created)) =
            create_album(State(store.clone()), Path("4".to_string()), body)
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created, Album::new("4", "X", "Y", 9.99));

        let PrettyJson(fetched) = get_album(State(store), Path("4".to_string()))
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let store = RecordStore::seeded();

        let result = create_album(
            State(store.clone()),
            Path("4".to_string()),
            Bytes::from_static(b"{not json"),
        )
        .await;

        assert!(matches!(result, Err(ApiError::InvalidBody { .. })));
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let store = RecordStore::seeded();

        let result = delete_album(State(store.clone()), Path("999".to_string())).await;
        match result {
            Err(ApiError::NotFound(CatalogError::AlbumNotFound { id })) => assert_eq!(id, "999"),
            other => panic!("Expected not found, got {:?}", other.map(|j| j.0)),
        }
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let PrettyJson(albums) = list_albums(State(RecordStore::new())).await;
        assert!(albums.is_empty());
    }
}
