//! Server configuration.
//!
//! Values come from command-line flags, which fall back to environment
//! variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MEDIFIND_DATA` | data/doctors.json | Provider data file |
//! | `MEDIFIND_HOST` | 127.0.0.1 | Host to bind |
//! | `MEDIFIND_PORT` | 3000 | Server port |
//! | `MEDIFIND_LOG_LEVEL` | info | Log level |
//! | `MEDIFIND_ENABLE_CORS` | true | Allow cross-origin requests |

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Provider data file.
    pub data_path: PathBuf,
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to attach a permissive CORS layer.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/doctors.json"),
            host: "127.0.0.1".to_string(),
            port: 3000,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Address to bind, or an error naming the bad host.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("Invalid host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Base URL for log and console output.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
