//! Response cache: in-memory LRU with an optional JSON file tier.
//!
//! - L1: `LruCache` behind a mutex, bounded by entry count
//! - L2: one pretty-printed JSON file per key under the cache directory
//!
//! Every entry records when it was stored and expires after the cache's
//! TTL, in both tiers. Stored values are never mutated; readers get clones.
//! Two callers missing on the same key may both fetch and store; the last
//! write wins.

use lru::LruCache;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::{
    api::types::StandingsPayload, core::config::Config, standings::LeagueEntry, LeagueCode,
    Season,
};

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, replacing it atomically: readers see either the
/// old contents or the new ones, never a partial write.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Where a returned value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from memory or disk
    Hit,
    /// Not cached (or expired); fetched
    Miss,
    /// Cache bypassed on request; fetched and overwritten
    Refreshed,
}

/// Canonical cache key for one memoized call
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File-system safe name for this entry (without extension)
    fn to_file_key(&self) -> String;

    fn to_file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.to_file_key()))
    }
}

/// The league directory takes no arguments, so it has exactly one key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaguesCacheKey;

impl CacheKey for LeaguesCacheKey {
    fn to_file_key(&self) -> String {
        "leagues".to_string()
    }
}

/// Cache key for one league's standings in one season
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandingsCacheKey {
    league: LeagueCode,
    season: Season,
}

impl StandingsCacheKey {
    /// Codes are compared trimmed and lowercased.
    pub fn new(league: &LeagueCode, season: Season) -> Self {
        Self {
            league: LeagueCode::new(league.as_str().trim().to_lowercase()),
            season,
        }
    }
}

impl CacheKey for StandingsCacheKey {
    fn to_file_key(&self) -> String {
        let league: String = self
            .league
            .as_str()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("standings_{}_s{}", league, self.season.as_u16())
    }
}

/// On-disk envelope: the value plus when it was stored
#[derive(Serialize, Deserialize)]
struct StoredEntry<V> {
    stored_at_secs: u64,
    value: V,
}

struct MemoryEntry<V> {
    stored_at: SystemTime,
    value: V,
}

/// LRU memory cache with optional file persistence and a fixed TTL
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, MemoryEntry<V>>>,
    memory_capacity: NonZeroUsize,
    ttl: Duration,
    disk_dir: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache; `disk_dir: None` keeps it memory-only.
    pub fn new(memory_capacity: NonZeroUsize, ttl: Duration, disk_dir: Option<PathBuf>) -> Self {
        Self {
            memory_cache: Mutex::new(LruCache::new(memory_capacity)),
            memory_capacity,
            ttl,
            disk_dir,
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, MemoryEntry<V>>> {
        // Entries are only ever replaced whole, so a poisoned lock is still consistent
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_fresh(&self, stored_at: SystemTime) -> bool {
        SystemTime::now()
            .duration_since(stored_at)
            .map(|age| age < self.ttl)
            // Stamped in the future: clock skew or a corrupt file
            .unwrap_or(false)
    }

    /// Get an unexpired item (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        {
            let mut memory = self.memory();
            if let Some(entry) = memory.get(key) {
                if self.is_fresh(entry.stored_at) {
                    return Some(entry.value.clone());
                }
                memory.pop(key);
            }
        }

        let (stored_at, value) = self.get_from_disk(key)?;
        if !self.is_fresh(stored_at) {
            debug!(key = %key.to_file_key(), "disk cache entry expired");
            return None;
        }

        // Promote to memory cache
        self.memory().put(
            key.clone(),
            MemoryEntry {
                stored_at,
                value: value.clone(),
            },
        );
        Some(value)
    }

    /// Store an item in memory and, when enabled, on disk
    pub fn put(&self, key: K, value: V) {
        let stored_at = SystemTime::now();

        if let Err(e) = self.put_to_disk(&key, &value, stored_at) {
            warn!(key = %key.to_file_key(), error = %e, "failed to write disk cache");
        }

        self.memory().put(key, MemoryEntry { stored_at, value });
    }

    fn get_from_disk(&self, key: &K) -> Option<(SystemTime, V)> {
        let path = key.to_file_path(self.disk_dir.as_ref()?);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str::<StoredEntry<V>>(&content) {
            Ok(entry) => Some((
                UNIX_EPOCH + Duration::from_secs(entry.stored_at_secs),
                entry.value,
            )),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V, stored_at: SystemTime) -> std::io::Result<()> {
        let Some(dir) = self.disk_dir.as_ref() else {
            return Ok(());
        };
        let entry = StoredEntry {
            stored_at_secs: stored_at
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            value,
        };
        let content = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(dir), &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory().clear();
    }

    /// (entries in memory, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity.get())
    }
}

/// The caches used by the commands, built from [`Config`]
pub struct CacheManager {
    pub leagues: UnifiedCache<LeaguesCacheKey, Vec<LeagueEntry>>,
    pub standings: UnifiedCache<StandingsCacheKey, StandingsPayload>,
}

impl CacheManager {
    pub fn new(config: &Config) -> Self {
        Self {
            leagues: UnifiedCache::new(
                NonZeroUsize::MIN,
                config.leagues_ttl,
                config.cache_dir.clone(),
            ),
            standings: UnifiedCache::new(
                config.cache_capacity,
                config.standings_ttl,
                config.cache_dir.clone(),
            ),
        }
    }

    /// Memory usage statistics for all caches
    pub fn memory_stats(&self) -> HashMap<String, (usize, usize)> {
        let mut stats = HashMap::new();
        stats.insert("leagues".to_string(), self.leagues.memory_stats());
        stats.insert("standings".to_string(), self.standings.memory_stats());
        stats
    }
}
