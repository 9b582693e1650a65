use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;

use albums_adapters::DEFAULT_LISTEN_ADDR;
use commands::{execute_serve_command, init_tracing};
use config::{DeploymentMode, ServiceConfig, LEGACY_MODE_VAR};

#[derive(Parser, Debug)]
#[command(name = "albums")]
#[command(about = "Album service - in-memory album CRUD over HTTP or AWS Lambda")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Deployment mode; "release" answers Lambda events instead of listening.
    /// Falls back to GIN_MODE when unset.
    #[arg(long, env = "ALBUMS_MODE")]
    pub mode: Option<String>,
    /// Address to listen on in local mode
    #[arg(long, env = "ALBUMS_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,
}

impl Cli {
    fn into_config(self, legacy_mode: Option<String>) -> ServiceConfig {
        ServiceConfig {
            mode: DeploymentMode::resolve(self.mode.as_deref(), legacy_mode.as_deref()),
            listen_addr: self.listen,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config(std::env::var(LEGACY_MODE_VAR).ok());
    init_tracing(config.mode);

    if let Err(e) = execute_serve_command(config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["albums"]).unwrap();
        let config = cli.into_config(None);

        // ALBUMS_MODE may leak in from the environment running the tests.
        if std::env::var_os("ALBUMS_LISTEN").is_none() {
            assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        }
        if std::env::var_os("ALBUMS_MODE").is_none() {
            assert_eq!(config.mode, DeploymentMode::Local);
        }
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["albums", "--mode", "release", "--listen", "0.0.0.0:3000"])
                .unwrap();
        let config = cli.into_config(None);

        assert_eq!(config.mode, DeploymentMode::Serverless);
        assert_eq!(config.listen_addr.port(), 3000);
    }

    #[test]
    fn test_cli_legacy_mode() {
        let cli = Cli::try_parse_from(["albums", "--listen", "127.0.0.1:8080"]).unwrap();
        if cli.mode.is_some() {
            // ALBUMS_MODE set in the test environment takes precedence.
            return;
        }

        let config = cli.into_config(Some("release".to_string()));
        assert_eq!(config.mode, DeploymentMode::Serverless);
    }

    #[test]
    fn test_cli_mode_flag_beats_legacy() {
        let cli = Cli::try_parse_from(["albums", "--mode", "debug"]).unwrap();
        let config = cli.into_config(Some("release".to_string()));
        assert_eq!(config.mode, DeploymentMode::Local);
    }

    #[test]
    fn test_cli_rejects_bad_address() {
        assert!(Cli::try_parse_from(["albums", "--listen", "not-an-address"]).is_err());
    }
}
