//! Request-level errors and their HTTP rendering

use albums_catalog::CatalogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::PrettyJson;

/// Errors a handler can answer a request with
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("album not found")]
    NotFound(#[from] CatalogError),

    #[error("invalid album payload: {reason}")]
    InvalidBody { reason: String },

    #[error("route not found")]
    RouteNotFound,
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ApiError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorMessage {
            message: self.to_string(),
        };
        (self.status(), PrettyJson(body)).into_response()
    }
}
