//! Error types for the football standings CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FootyError>;

#[derive(Error, Debug)]
pub enum FootyError {
    /// Transport failure or a non-success HTTP status from the standings API.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response (or cached payload) did not have the expected JSON shape.
    #[error("Unexpected response shape: {message}")]
    Schema { message: String },

    #[error("No standings data available for the {season_label} season")]
    EmptyResult { season_label: String },

    #[error("League not found: {league}")]
    LeagueNotFound { league: String },

    #[error("Season {season} is outside the selectable range {earliest}-{latest}")]
    InvalidSeason {
        season: u16,
        earliest: u16,
        latest: u16,
    },

    #[error("Invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl FootyError {
    pub fn schema(message: impl Into<String>) -> Self {
        FootyError::Schema {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for FootyError {
    fn from(err: serde_json::Error) -> Self {
        FootyError::schema(err.to_string())
    }
}
