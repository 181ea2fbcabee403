//! Listener configuration read from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use tracing::warn;

/// Default listener port
pub const DEFAULT_PORT: u16 = 3000;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST {0:?} is not an IP address")]
    InvalidHost(String),
}

/// Where to listen and what environment to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub app_env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            app_env: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `APP_ENV`
    ///
    /// The page keeps one shared session, so the default host is loopback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            Err(_) => defaults.host,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT={:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => defaults.port,
        };

        let app_env = env::var("APP_ENV").unwrap_or(defaults.app_env);

        Ok(Self { host, port, app_env })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
