//! Route table for the album service.
//!
//! The same [`Router`] is served by both transport bindings, so nothing in
//! here may assume a socket is present.

use std::time::Instant;

use albums_catalog::RecordStore;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
    Router,
};
use tracing::info;

use crate::handlers::{create_album, delete_album, get_album, list_albums, route_not_found};

/// Build the album router over the given store.
pub fn build_router(store: RecordStore) -> Router {
    Router::new()
        .route("/albums", get(list_albums))
        .route("/albums/add/:id", post(create_album))
        .route("/albums/:id", get(get_album))
        .route("/albums/delete/:id", delete(delete_album))
        .fallback(route_not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(store)
}

/// One log line per request
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:.2}ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    response
}
