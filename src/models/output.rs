//! Output models used for printing, CSV export and JSON serialization.

use serde::Serialize;

use crate::standings::{StandingsRow, StandingsTable};

/// CSV line for one team. Header names are the exported column names.
#[derive(Debug, Serialize)]
pub struct CsvRecord<'a> {
    pub rank: u32,
    #[serde(rename = "Teams")]
    pub team: &'a str,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: &'a str,
    #[serde(rename = "Points")]
    pub points: i32,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Draws")]
    pub draws: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Played")]
    pub played: u32,
    #[serde(rename = "Scored")]
    pub scored: u32,
    #[serde(rename = "Conceded")]
    pub conceded: u32,
}

impl<'a> From<&'a StandingsRow> for CsvRecord<'a> {
    fn from(row: &'a StandingsRow) -> Self {
        Self {
            rank: row.rank,
            team: &row.team,
            abbreviation: &row.abbreviation,
            points: row.points,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            played: row.played,
            scored: row.scored,
            conceded: row.conceded,
        }
    }
}

/// One marker of the goals scatter plot: conceded on x, scored on y,
/// marker size from points, colour keyed by team.
#[derive(Debug, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub team: &'a str,
    pub conceded: u32,
    pub scored: u32,
    pub points: i32,
}

impl<'a> From<&'a StandingsRow> for ScatterPoint<'a> {
    fn from(row: &'a StandingsRow) -> Self {
        Self {
            team: &row.team,
            conceded: row.conceded,
            scored: row.scored,
            points: row.points,
        }
    }
}

/// JSON payload for `--format json`.
#[derive(Debug, Serialize)]
pub struct StandingsReport<'a> {
    /// League code, e.g. `eng.1`.
    pub league: &'a str,
    pub league_name: &'a str,
    /// Requested season start year.
    pub season: u16,
    pub season_label: &'a str,
    pub rows: &'a [StandingsRow],
}

impl<'a> StandingsReport<'a> {
    pub fn new(league: &'a str, league_name: &'a str, season: u16, table: &'a StandingsTable) -> Self {
        Self {
            league,
            league_name,
            season,
            season_label: &table.season_label,
            rows: &table.rows,
        }
    }
}
