//! Football standings API: wire types, HTTP client and cached access.

pub mod cached;
pub mod http;
pub mod types;

pub use cached::{load_or_fetch_leagues, load_or_fetch_standings, resolve_league};
pub use http::StandingsClient;
pub use types::StandingsPayload;
