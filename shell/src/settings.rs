//! Shell configuration loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8050;
const DEFAULT_DATABASE_PATH: &str = "site.db";
const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Listener and storage settings for the shell app.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHELL")]
pub struct ShellSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    pub port: Option<u16>,
    /// SQLite database file holding the `users` table.
    pub database_path: Option<PathBuf>,
    /// Maximum pooled SQLite connections.
    pub db_pool_size: Option<u32>,
}

impl ShellSettings {
    /// Socket address for the listener, falling back to `127.0.0.1:8050`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Database file, falling back to `site.db` in the working directory.
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
    }

    /// Pool size, falling back to 4 connections. Zero is treated as one.
    pub fn db_pool_size(&self) -> u32 {
        self.db_pool_size.unwrap_or(DEFAULT_DB_POOL_SIZE).max(1)
    }
}
