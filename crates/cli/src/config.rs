//! Service configuration
//!
//! Everything is read once at startup; there is no reloading.

use std::fmt;
use std::net::SocketAddr;

use albums_adapters::ServerConfig;

/// Value of the mode flag that selects the Lambda binding
pub const SERVERLESS_FLAG: &str = "release";

/// Mode variable honoured when `ALBUMS_MODE` is unset, for deployments that
/// predate it
pub const LEGACY_MODE_VAR: &str = "GIN_MODE";

/// Transport binding chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Serve on a local TCP socket
    Local,
    /// Answer AWS Lambda invocation events
    Serverless,
}

impl DeploymentMode {
    /// Map the raw mode flag to a mode. Only `release` selects serverless.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(SERVERLESS_FLAG) => DeploymentMode::Serverless,
            _ => DeploymentMode::Local,
        }
    }

    /// Resolve the mode from the primary flag, falling back to the legacy one.
    pub fn resolve(flag: Option<&str>, legacy_flag: Option<&str>) -> Self {
        Self::from_flag(flag.or(legacy_flag))
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentMode::Local => write!(f, "local"),
            DeploymentMode::Serverless => write!(f, "serverless"),
        }
    }
}

/// Resolved startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub mode: DeploymentMode,
    pub listen_addr: SocketAddr,
}

impl ServiceConfig {
    /// Settings for the local listener
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            listen_addr: self.listen_addr,
        }
    }
}
