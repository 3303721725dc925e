//! Runtime settings for the command line and web front ends.

use std::env;
use std::time::Duration;

/// log4rs configuration file read at startup when present.
pub const LOG4RS_FILE: &str = "log4rs.yml";

pub const DEFAULT_PORT: &str = "63000";
pub const DEFAULT_SERVER: &str = "127.0.0.1";
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates/";

/// Per-request limit for reading and answering a request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Drain time between the shutdown signal and closing the listener.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

pub const ENV_SERVER: &str = "SUBNETCALC_SERVER";
pub const ENV_PORT: &str = "SUBNETCALC_PORT";

/// Where the web front end listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server: String,
    pub port: String,
    pub template_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT.to_string(),
            template_dir: DEFAULT_TEMPLATE_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build from flag values; flags left at their defaults fall back to
    /// `SUBNETCALC_SERVER` / `SUBNETCALC_PORT` when those are set.
    pub fn from_flags(server: &str, port: &str, template_dir: &str) -> ServerConfig {
        ServerConfig {
            server: pick(server, DEFAULT_SERVER, env::var(ENV_SERVER).ok()),
            port: pick(port, DEFAULT_PORT, env::var(ENV_PORT).ok()),
            template_dir: template_dir.to_string(),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}

fn pick(flag: &str, default: &str, env_value: Option<String>) -> String {
    match env_value {
        Some(v) if flag == default && !v.trim().is_empty() => v.trim().to_string(),
        _ => flag.to_string(),
    }
}
