//! Serve command implementation
//!
//! Builds the seeded record store and router, then hands them to the
//! transport binding selected by the deployment mode.

use albums_adapters::{build_router, HttpServer, LambdaShim};
use albums_catalog::RecordStore;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DeploymentMode, ServiceConfig};

// The binary target is `albums`; the library crates log under their own names.
const DEFAULT_LOG_FILTER: &str = "albums=info,albums_adapters=info,albums_catalog=info,warn";

/// Initialize tracing for the selected mode.
///
/// CloudWatch stamps and colours nothing itself, so serverless output drops
/// ANSI escapes and local timestamps.
pub fn init_tracing(mode: DeploymentMode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match mode {
        DeploymentMode::Local => tracing_subscriber::fmt().with_env_filter(filter).init(),
        DeploymentMode::Serverless => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .init(),
    }
}

/// Execute the serve command
pub async fn execute_serve_command(config: ServiceConfig) -> Result<()> {
    let store = RecordStore::seeded();
    info!("Seeded record store with {} albums", store.len());

    let router = build_router(store);
    info!("Starting album service in {} mode", config.mode);

    match config.mode {
        DeploymentMode::Local => {
            println!("🎵 Album service on http://{}", config.listen_addr);
            println!("🔄 Press Ctrl+C to shutdown");

            HttpServer::new(config.server_config())
                .run(router)
                .await
                .context("Local HTTP server failed")
        }
        DeploymentMode::Serverless => LambdaShim::new(router)
            .run()
            .await
            .context("Serverless adapter failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_names_workspace_targets() {
        let binary_target = module_path!().split("::").next().unwrap();
        let directives: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();

        for target in [binary_target, "albums_adapters", "albums_catalog"] {
            let directive = format!("{}=info", target);
            assert!(
                directives.contains(&directive.as_str()),
                "missing directive for {}",
                target
            );
        }
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
