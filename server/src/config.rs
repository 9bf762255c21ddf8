//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Directories served as static assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirs {
    /// Stylesheet and other hand-written assets, mounted at `/static`.
    pub static_dir: PathBuf,
    /// `wasm-pack` output of the client crate, mounted at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl Default for AssetDirs {
    fn default() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self { static_dir: manifest_dir.join("static"), pkg_dir: manifest_dir.join("../client/pkg") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub assets: AssetDirs,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `STATIC_DIR`: default `server/static`
    /// - `PKG_DIR`: default `client/pkg`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing { var: "DATABASE_URL" })?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        let defaults = AssetDirs::default();
        let assets = AssetDirs {
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            pkg_dir: lookup("PKG_DIR").map_or(defaults.pkg_dir, PathBuf::from),
        };

        Ok(Self { database_url, port, db_max_connections, assets })
    }
}
