//! Dashboard configuration.
//!
//! Settings come from an optional `dashboard.toml`, then environment
//! variables override individual fields:
//!
//! - `DATA_SOURCE`: URL or path of the launch CSV
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::io::DataSource;

/// Public copy of the SpaceX launch table.
pub const DEFAULT_DATA_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where the launch table is loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_source")]
    pub source: String,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First `dashboard.toml` found in the standard locations, if any.
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// File settings (or defaults when no file exists) with environment overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::find_default_file() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Apply `DATA_SOURCE`, `HOST` and `PORT` when they are set.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(source) = env::var("DATA_SOURCE") {
            self.data.source = source;
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        Ok(self)
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.data.source)
    }

    /// Resolve the configured host and port. Host names such as `localhost`
    /// go through the system resolver; the first address wins.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.trim();
        let port = self.server.port;
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", host, port));

        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(invalid());
        }
        (host, port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}
