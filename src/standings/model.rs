//! League and standings records as the rest of the crate sees them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::LeagueCode;

/// One competition from the league directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueEntry {
    pub code: LeagueCode,
    pub display_name: String,
}

impl LeagueEntry {
    /// True when `query` is this league's code, or its display name
    /// ignoring case and surrounding whitespace.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.code.as_str() == query || self.display_name.eq_ignore_ascii_case(query)
    }
}

/// One team's season record.
///
/// `rank` is whatever the upstream API reports; it is never recomputed
/// from points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team: String,
    pub abbreviation: String,
    /// Signed: deductions can take a club below zero.
    pub points: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub played: u32,
    pub scored: u32,
    pub conceded: u32,
}

/// Standings for one league and season, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Human-readable season, e.g. "2022-23".
    pub season_label: String,
    pub rows: Vec<StandingsRow>,
}

impl StandingsTable {
    pub fn new(season_label: impl Into<String>, rows: Vec<StandingsRow>) -> Self {
        Self {
            season_label: season_label.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted, de-duplicated team abbreviations.
    pub fn abbreviations(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.abbreviation.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn max_rank(&self) -> Option<u32> {
        self.rows.iter().map(|row| row.rank).max()
    }
}

/// Row selection: a row is kept when its abbreviation is allowed AND its
/// rank is at most `max_rank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub allowed_abbreviations: HashSet<String>,
    pub max_rank: u32,
}

impl FilterCriteria {
    pub fn new<I, S>(allowed_abbreviations: I, max_rank: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_abbreviations: allowed_abbreviations.into_iter().map(Into::into).collect(),
            max_rank,
        }
    }

    /// Criteria that keep every row of `table`.
    pub fn select_all(table: &StandingsTable) -> Self {
        Self::new(table.abbreviations(), table.max_rank().unwrap_or(0))
    }

    /// Fill in whichever selection the user left out with the
    /// select-everything default for `table`.
    pub fn from_selection(
        table: &StandingsTable,
        teams: Option<Vec<String>>,
        max_rank: Option<u32>,
    ) -> Self {
        let all = Self::select_all(table);
        Self {
            allowed_abbreviations: teams
                .map(|teams| teams.into_iter().collect())
                .unwrap_or(all.allowed_abbreviations),
            max_rank: max_rank.unwrap_or(all.max_rank),
        }
    }

    pub fn allows(&self, row: &StandingsRow) -> bool {
        self.allowed_abbreviations.contains(&row.abbreviation) && row.rank <= self.max_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: u32, abbreviation: &str) -> StandingsRow {
        StandingsRow {
            rank,
            team: format!("{abbreviation} FC"),
            abbreviation: abbreviation.to_string(),
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            played: 0,
            scored: 0,
            conceded: 0,
        }
    }

    #[test]
    fn test_league_entry_matches_code_or_name() {
        let entry = LeagueEntry {
            code: LeagueCode::new("eng.1"),
            display_name: "English Premier League".to_string(),
        };

        assert!(entry.matches("eng.1"));
        assert!(entry.matches("english premier league"));
        assert!(entry.matches("  English Premier League "));
        assert!(!entry.matches("ENG.1"));
        assert!(!entry.matches("Premier"));
    }

    #[test]
    fn test_abbreviations_are_sorted_and_unique() {
        let table = StandingsTable::new("2022-23", vec![row(1, "MCI"), row(2, "ARS"), row(3, "MUN")]);
        assert_eq!(table.abbreviations(), vec!["ARS", "MCI", "MUN"]);
    }

    #[test]
    fn test_max_rank() {
        let table = StandingsTable::new("2022-23", vec![row(1, "MCI"), row(20, "SOU")]);
        assert_eq!(table.max_rank(), Some(20));
        assert_eq!(StandingsTable::new("2022-23", vec![]).max_rank(), None);
    }

    #[test]
    fn test_from_selection_defaults() {
        let table = StandingsTable::new("2022-23", vec![row(1, "MCI"), row(2, "ARS")]);

        let criteria = FilterCriteria::from_selection(&table, None, None);
        assert_eq!(criteria, FilterCriteria::select_all(&table));

        let criteria = FilterCriteria::from_selection(&table, Some(vec!["ARS".into()]), None);
        assert_eq!(criteria.allowed_abbreviations.len(), 1);
        assert_eq!(criteria.max_rank, 2);

        let criteria = FilterCriteria::from_selection(&table, None, Some(1));
        assert_eq!(criteria.allowed_abbreviations.len(), 2);
        assert_eq!(criteria.max_rank, 1);
    }

    #[test]
    fn test_explicit_empty_team_selection_stays_empty() {
        let table = StandingsTable::new("2022-23", vec![row(1, "MCI")]);
        let criteria = FilterCriteria::from_selection(&table, Some(vec![]), None);
        assert!(criteria.allowed_abbreviations.is_empty());
    }
}
