//! Shared setup for commands that talk to the standings API.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    api::StandingsClient,
    cli::CacheFlags,
    core::{CacheManager, CacheStatus, Config},
    Result,
};

/// Resources needed by every API-backed command
pub struct CommandContext {
    pub config: Config,
    pub client: StandingsClient,
    pub cache: CacheManager,
    pub refresh: bool,
}

impl CommandContext {
    /// Build from the environment, then apply the CLI cache flags.
    pub fn new(flags: CacheFlags) -> Result<Self> {
        Self::from_config(Config::from_env()?, flags)
    }

    pub fn from_config(config: Config, flags: CacheFlags) -> Result<Self> {
        let config = if flags.no_cache {
            config.without_disk_cache()
        } else {
            config
        };
        debug!(?config, "command context");

        Ok(Self {
            client: StandingsClient::new(&config)?,
            cache: CacheManager::new(&config),
            refresh: flags.refresh,
            config,
        })
    }
}

/// Short human description of where data came from.
pub fn describe_cache_status(status: CacheStatus) -> &'static str {
    match status {
        CacheStatus::Hit => "from cache",
        CacheStatus::Miss => "cache miss",
        CacheStatus::Refreshed => "refreshed",
    }
}

/// Open `path` for writing, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
