//! Core utilities for the football standings CLI
//!
//! - `cache`: in-memory LRU + file system response cache
//! - `config`: environment-driven runtime configuration

pub mod cache;
pub mod config;

// Re-export commonly used items for convenience
pub use cache::{CacheKey, CacheManager, CacheStatus, UnifiedCache};
pub use config::Config;
