//! Type-safe wrappers and enums for CLI arguments.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::OutputFormat;
pub use ids::LeagueCode;
pub use time::{Season, SeasonRange};
