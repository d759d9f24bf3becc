//! Configuration loading and representation.
//!
//! Everything comes from environment variables:
//!
//! - `CATALOG_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `CATALOG_DATA_FILE`: JSON snapshot path; unset means an in-memory store

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const DATA_FILE_VAR: &str = "CATALOG_DATA_FILE";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Where products are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    InMemory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageConfig::InMemory,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid {BIND_ADDR_VAR}: {raw_addr:?}"))?;

        let storage = match lookup(DATA_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => StorageConfig::File(PathBuf::from(path.trim())),
            None => StorageConfig::InMemory,
        };

        Ok(Self { bind_addr, storage })
    }
}
