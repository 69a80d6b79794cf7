//! Runtime configuration, read from `FOOTY_*` environment variables.
//!
//! Every value has a default, so an empty environment is a valid
//! configuration. CLI flags (`--no-cache`) are applied on top.

use std::{num::NonZeroUsize, path::PathBuf, time::Duration};

use crate::error::{FootyError, Result};

pub const API_BASE_URL_ENV_VAR: &str = "FOOTY_API_BASE_URL";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FOOTY_HTTP_TIMEOUT_SECS";
pub const CACHE_DIR_ENV_VAR: &str = "FOOTY_CACHE_DIR";
pub const CACHE_TTL_ENV_VAR: &str = "FOOTY_CACHE_TTL_SECS";
pub const CACHE_CAPACITY_ENV_VAR: &str = "FOOTY_CACHE_CAPACITY";

/// Public football standings API.
pub const DEFAULT_API_BASE_URL: &str = "https://api-football-standings.azharimm.site";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_STANDINGS_TTL: Duration = Duration::from_secs(60 * 60);
/// League metadata rarely changes.
const DEFAULT_LEAGUES_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout: Duration,
    /// `None` keeps the cache in memory only.
    pub cache_dir: Option<PathBuf>,
    pub standings_ttl: Duration,
    pub leagues_ttl: Duration,
    pub cache_capacity: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            cache_dir: Some(default_cache_dir()),
            standings_ttl: DEFAULT_STANDINGS_TTL,
            leagues_ttl: DEFAULT_LEAGUES_TTL,
            cache_capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_BASE_URL_ENV_VAR) {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = get(HTTP_TIMEOUT_ENV_VAR) {
            config.http_timeout = Duration::from_secs(parse_u64(HTTP_TIMEOUT_ENV_VAR, &raw)?);
        }
        if let Some(dir) = get(CACHE_DIR_ENV_VAR) {
            config.cache_dir = Some(PathBuf::from(dir.trim()));
        }
        if let Some(raw) = get(CACHE_TTL_ENV_VAR) {
            config.standings_ttl = Duration::from_secs(parse_u64(CACHE_TTL_ENV_VAR, &raw)?);
        }
        if let Some(raw) = get(CACHE_CAPACITY_ENV_VAR) {
            let capacity = parse_u64(CACHE_CAPACITY_ENV_VAR, &raw)?;
            config.cache_capacity = usize::try_from(capacity)
                .ok()
                .and_then(NonZeroUsize::new)
                .ok_or_else(|| config_error(CACHE_CAPACITY_ENV_VAR, &raw))?;
        }

        Ok(config)
    }

    /// Drop the disk tier of the cache.
    pub fn without_disk_cache(mut self) -> Self {
        self.cache_dir = None;
        self
    }
}

/// `~/.cache/football-standings` (or the platform equivalent).
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("football-standings")
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| config_error(key, raw))
}

fn config_error(key: &str, raw: &str) -> FootyError {
    FootyError::Config {
        key: key.to_string(),
        value: raw.to_string(),
    }
}
