//! Identifier types for upstream leagues.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// League code used by the standings API (e.g. `eng.1`).
///
/// Opaque to us: codes come from the league directory or from a
/// user who already knows one.
///
/// # Examples
///
/// ```rust
/// use football_standings::LeagueCode;
///
/// let code = LeagueCode::new("eng.1");
/// assert_eq!(code.as_str(), "eng.1");
/// assert_eq!(code.to_string(), "eng.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueCode(String);

impl LeagueCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LeagueCode {
    /// English Premier League.
    fn default() -> Self {
        Self::new(crate::DEFAULT_LEAGUE_CODE)
    }
}

impl fmt::Display for LeagueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LeagueCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim()))
    }
}
