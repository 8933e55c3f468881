//! Server configuration from environment variables
//!
//! HOST (default 0.0.0.0), PORT (default 3000). Log filtering is handled by
//! RUST_LOG in the binary.

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host
                .parse()
                .with_context(|| format!("Invalid HOST address: {:?}", host))?;
        }

        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => tracing::warn!(
                    "Ignoring unparsable PORT {:?}, using {}",
                    port,
                    DEFAULT_PORT
                ),
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
