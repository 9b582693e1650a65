//! AWS Lambda binding.
//!
//! `lambda_http` turns API Gateway and ALB invocation events into
//! `http::Request`s and turns our responses back into the matching response
//! events. This module only adapts bodies and paths so the same [`Router`]
//! used by the local listener can answer them.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Uri},
    response::Response,
    Router,
};
use lambda_http::{service_fn, RequestExt};
use tower::ServiceExt as _;
use tracing::{debug, info};

/// Dispatches Lambda HTTP events through the album router.
#[derive(Clone)]
pub struct LambdaShim {
    router: Router,
}

impl LambdaShim {
    /// Wrap `router` for serverless invocation.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Handle one translated invocation event.
    ///
    /// Routes match against the path the client requested, not the
    /// stage-prefixed one `lambda_http` builds for API Gateway events.
    pub async fn handle(&self, request: lambda_http::Request) -> Result<Response, lambda_http::Error> {
        let raw_path = request.raw_http_path().to_owned();
        let (mut parts, body) = request.into_parts();

        if let Some(uri) = with_path(&parts.uri, &raw_path) {
            parts.uri = uri;
        }
        debug!("Dispatching {} {}", parts.method, parts.uri.path());

        let request = Request::from_parts(parts, Body::from(body.to_vec()));
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    /// Hand control to the Lambda runtime; returns only on runtime failure.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Album service waiting for Lambda invocations");

        let shim = Arc::new(self);
        lambda_http::run(service_fn(move |request: lambda_http::Request| {
            let shim = Arc::clone(&shim);
            async move { shim.handle(request).await }
        }))
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
    }
}

/// `uri` with its path replaced by `path`, keeping scheme, authority and query.
///
/// Returns `None` for an empty `path`, which events without a raw path yield.
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    if path.is_empty() {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
