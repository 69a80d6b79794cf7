//! Season years and the range of seasons a user may pick from.

use crate::error::{FootyError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of past seasons offered for selection.
pub const SELECTABLE_SEASONS: u16 = 10;

/// Type-safe wrapper for a season's starting year (e.g. 2022 for "2022-23").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FootyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u16>() {
            Ok(year) if trimmed.len() == 4 => Ok(Self(year)),
            _ => Err(FootyError::Config {
                key: "season".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// The seasons selectable in a given calendar year: the ten years
/// before it, newest first. The current year is never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    current_year: u16,
}

impl SeasonRange {
    pub fn for_year(current_year: u16) -> Self {
        Self { current_year }
    }

    /// Range anchored on today's date (UTC).
    pub fn current() -> Self {
        let year = chrono::Utc::now().year();
        Self::for_year(u16::try_from(year).unwrap_or(u16::MAX))
    }

    pub fn latest(&self) -> Season {
        Season(self.current_year.saturating_sub(1))
    }

    pub fn earliest(&self) -> Season {
        Season(self.current_year.saturating_sub(SELECTABLE_SEASONS))
    }

    /// Selectable seasons, newest first.
    pub fn seasons(&self) -> Vec<Season> {
        (self.earliest().0..=self.latest().0)
            .rev()
            .map(Season)
            .collect()
    }

    /// The pre-selected season.
    pub fn default_season(&self) -> Season {
        self.latest()
    }

    pub fn contains(&self, season: Season) -> bool {
        season >= self.earliest() && season <= self.latest()
    }

    pub fn validate(&self, season: Season) -> Result<Season> {
        if self.contains(season) {
            Ok(season)
        } else {
            Err(FootyError::InvalidSeason {
                season: season.as_u16(),
                earliest: self.earliest().as_u16(),
                latest: self.latest().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_str() {
        assert_eq!(Season::from_str("2022").unwrap(), Season::new(2022));
        assert_eq!(Season::from_str(" 2019 ").unwrap(), Season::new(2019));
    }

    #[test]
    fn test_season_from_str_rejects_non_years() {
        assert!(Season::from_str("22").is_err());
        assert!(Season::from_str("twenty").is_err());
        assert!(Season::from_str("-2022").is_err());
        assert!(Season::from_str("20222").is_err());
    }

    #[test]
    fn test_season_range_lists_ten_seasons_newest_first() {
        let range = SeasonRange::for_year(2026);
        let seasons = range.seasons();

        assert_eq!(seasons.len(), 10);
        assert_eq!(seasons.first(), Some(&Season::new(2025)));
        assert_eq!(seasons.last(), Some(&Season::new(2016)));
        assert_eq!(range.default_season(), Season::new(2025));
    }

    #[test]
    fn test_season_range_excludes_current_year() {
        let range = SeasonRange::for_year(2026);
        assert!(!range.contains(Season::new(2026)));
        assert!(range.contains(Season::new(2016)));
        assert!(!range.contains(Season::new(2015)));
    }

    #[test]
    fn test_season_range_validate() {
        let range = SeasonRange::for_year(2026);
        assert_eq!(range.validate(Season::new(2020)).unwrap(), Season::new(2020));

        match range.validate(Season::new(2010)) {
            Err(FootyError::InvalidSeason {
                season,
                earliest,
                latest,
            }) => {
                assert_eq!(season, 2010);
                assert_eq!(earliest, 2016);
                assert_eq!(latest, 2025);
            }
            other => panic!("Expected InvalidSeason, got {:?}", other),
        }
    }
}
