//! HTTP adapters for the album service
//!
//! The router and its handlers are transport agnostic. Two bindings sit on
//! top of them: [`HttpServer`] for a local socket and [`LambdaShim`] for
//! AWS Lambda invocation events.

pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod lambda;
pub mod response;
pub mod router;

pub use errors::{ApiError, ErrorMessage};
pub use http_server::{HttpServer, ServerConfig, DEFAULT_LISTEN_ADDR};
pub use lambda::LambdaShim;
pub use response::PrettyJson;
pub use router::build_router;
