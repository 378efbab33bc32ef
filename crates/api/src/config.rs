//! Runtime configuration, read from the environment (and an optional `.env`).
//!
//! | Variable       | Default           |
//! |----------------|-------------------|
//! | `HOST`         | `0.0.0.0`         |
//! | `PORT`         | `3000`            |
//! | `REQUIRE_AUTH` | `false`           |
//! | `ACCESS_KEY`   | `demo-access-key` |
//! | `STATIC_DIR`   | `public`          |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACCESS_KEY: &str = "demo-access-key";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),

    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Gate `/health` and `/v3/*` behind the `AccessKey` header.
    pub require_auth: bool,
    pub access_key: String,
    /// Directory served for unmatched paths; `None` disables static files.
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            require_auth: false,
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Load from process environment, after applying a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidHost(v))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidPort(v))?,
            None => defaults.port,
        };

        // Only the literal "true" enables the gate.
        let require_auth = lookup("REQUIRE_AUTH").is_some_and(|v| v.trim() == "true");

        let access_key = lookup("ACCESS_KEY")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.access_key);

        let static_dir = PathBuf::from(
            lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );
        let static_dir = static_dir.is_dir().then_some(static_dir);

        Ok(Self {
            host,
            port,
            require_auth,
            access_key,
            static_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
