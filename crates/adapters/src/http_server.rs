//! Local HTTP listener.
//!
//! Binds the album router to a TCP socket and serves it until the process is
//! asked to stop.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Address served when nothing else is configured
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Configuration for the local HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Embedded HTTP server.
pub struct HttpServer {
    config: ServerConfig,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] instance from the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve `router` until SIGINT or SIGTERM.
    pub async fn run(&self, router: Router) -> Result<()> {
        self.run_until(router, shutdown_signal()).await
    }

    /// Serve `router` until `shutdown` resolves.
    pub async fn run_until<F>(&self, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.listen_addr))?;

        serve(listener, router, shutdown).await
    }
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Album service listening on http://{}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated abnormally")?;

    info!("Album service stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
