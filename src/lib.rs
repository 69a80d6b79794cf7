//! Football League Standings Library
//!
//! Fetches league standings from the public football standings API,
//! flattens them into a table, filters them and writes them out as a
//! terminal table, CSV, JSON or scatter-plot data.
//!
//! ## Pipeline
//!
//! - **League directory**: name → endpoint code for every league the API serves
//! - **Standings fetch**: the raw payload for one league and season
//! - **Normalization**: one [`StandingsRow`] per team, upstream order preserved
//! - **Filtering**: keep rows whose team is selected AND whose rank is within a threshold
//!
//! Responses are memoized in an LRU cache (optionally persisted to disk) keyed
//! by the call arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use football_standings::{
//!     api::types::StandingsPayload,
//!     standings::{filter, normalize, FilterCriteria},
//! };
//!
//! # fn example() -> football_standings::Result<()> {
//! let payload: StandingsPayload = serde_json::from_value(serde_json::json!({
//!     "data": {
//!         "seasonDisplay": "2022-23",
//!         "standings": [{
//!             "team": { "name": "Arsenal", "abbreviation": "ARS" },
//!             "stats": [
//!                 { "value": 20 }, { "value": 3 }, { "value": 5 },
//!                 { "value": 28 }, { "value": 60 }, { "value": 25 },
//!                 { "value": 65 }, { "value": 0 }, { "value": 1 }
//!             ]
//!         }]
//!     }
//! }))?;
//!
//! let table = normalize(&payload)?;
//! let top_four = filter(&table, &FilterCriteria::new(table.abbreviations(), 4));
//! assert_eq!(top_four.rows[0].points, 65);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTY_API_BASE_URL=https://api-football-standings.azharimm.site
//! export FOOTY_CACHE_TTL_SECS=600
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod standings;

// Re-export commonly used types
pub use cli::types::{LeagueCode, OutputFormat, Season, SeasonRange};
pub use error::{FootyError, Result};
pub use standings::{FilterCriteria, LeagueEntry, StandingsRow, StandingsTable};

/// League shown when none is requested.
pub const DEFAULT_LEAGUE_CODE: &str = "eng.1";
pub const DEFAULT_LEAGUE_NAME: &str = "English Premier League";
