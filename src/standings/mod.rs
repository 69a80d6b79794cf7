//! Standings domain: the normalized table and the operations over it.
//!
//! - `model`: league, row, table and filter-criteria types
//! - `normalize`: API payload → [`StandingsTable`]
//! - `filter`: team/rank selection over a table

pub mod filter;
pub mod model;
pub mod normalize;

pub use filter::filter;
pub use model::{FilterCriteria, LeagueEntry, StandingsRow, StandingsTable};
pub use normalize::normalize;
