use serde::Deserialize;
use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::services::table::BinCount;

fn default_max_file_size() -> usize {
    // 10 MB in bytes
    10 * 1024 * 1024
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_file_size: usize,
    pub default_bins: BinCount,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_file_size: default_max_file_size(),
            default_bins: BinCount::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    /// Reads the process environment. `main` loads `.env` before this runs.
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a key lookup, falling back to defaults
    /// for every variable that is not set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = parse_var(&lookup, "EXPLORER_HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "EXPLORER_PORT")?.unwrap_or(defaults.port);
        let max_file_size = parse_var(&lookup, "EXPLORER_MAX_FILE_SIZE")?
            .unwrap_or(defaults.max_file_size);
        let preview_rows = parse_var(&lookup, "EXPLORER_PREVIEW_ROWS")?
            .unwrap_or(defaults.preview_rows);

        let default_bins = match parse_var::<usize, _>(&lookup, "EXPLORER_DEFAULT_BINS")? {
            Some(raw) => BinCount::try_from(raw)
                .map_err(|e| anyhow::anyhow!("Invalid EXPLORER_DEFAULT_BINS: {}", e))?,
            None => defaults.default_bins,
        };

        Ok(Config {
            host,
            port,
            max_file_size,
            default_bins,
            preview_rows,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Failed to parse {}={:?}", key, raw)),
        None => Ok(None),
    }
}

pub fn load_config() -> Result<Config> {
    let config = Config::new()?;
    tracing::info!(
        "Loaded configuration: addr={}, max_file_size={}B, default_bins={}, preview_rows={}",
        config.socket_addr(),
        config.max_file_size,
        config.default_bins,
        config.preview_rows
    );
    Ok(config)
}
