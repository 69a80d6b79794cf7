//! Flatten a standings payload into a [`StandingsTable`].
//!
//! Each team carries a list of statistics. When every statistic of a team
//! is labelled, fields are looked up by label, so a reordered list still
//! reads correctly. Unlabelled lists fall back to the fixed upstream order:
//!
//! | index | field    | label           |
//! |-------|----------|-----------------|
//! | 0     | wins     | `wins`          |
//! | 1     | losses   | `losses`        |
//! | 2     | draws    | `ties`          |
//! | 3     | played   | `gamesPlayed`   |
//! | 4     | scored   | `pointsFor`     |
//! | 5     | conceded | `pointsAgainst` |
//! | 6     | points   | `points`        |
//! | 7     | (unused) | `rankChange`    |
//! | 8     | rank     | `rank`          |
//!
//! A malformed team fails the whole payload; no partial table is returned.

use std::collections::HashSet;

use tracing::debug;

use super::model::{StandingsRow, StandingsTable};
use crate::api::types::{StandingEntry, StandingsPayload, StatEntry};
use crate::error::{FootyError, Result};


/// Upstream always sends at least this many statistics per team.
pub const MIN_STATS_PER_TEAM: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatField {
    Wins,
    Losses,
    Draws,
    Played,
    Scored,
    Conceded,
    Points,
    Rank,
}

impl StatField {
    fn position(self) -> usize {
        match self {
            StatField::Wins => 0,
            StatField::Losses => 1,
            StatField::Draws => 2,
            StatField::Played => 3,
            StatField::Scored => 4,
            StatField::Conceded => 5,
            StatField::Points => 6,
            StatField::Rank => 8,
        }
    }

    fn label(self) -> &'static str {
        match self {
            StatField::Wins => "wins",
            StatField::Losses => "losses",
            StatField::Draws => "ties",
            StatField::Played => "gamesPlayed",
            StatField::Scored => "pointsFor",
            StatField::Conceded => "pointsAgainst",
            StatField::Points => "points",
            StatField::Rank => "rank",
        }
    }
}

/// How a team's statistics are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatLookup {
    Labelled,
    Positional,
}

impl StatLookup {
    fn for_stats(stats: &[StatEntry]) -> Self {
        if stats.iter().all(StatEntry::is_labelled) {
            StatLookup::Labelled
        } else {
            StatLookup::Positional
        }
    }
}

/// Normalize a standings payload, preserving upstream row order.
///
/// # Errors
///
/// - [`FootyError::EmptyResult`] when the payload has no teams.
/// - [`FootyError::Schema`] when the season label is missing, a team has
///   fewer than [`MIN_STATS_PER_TEAM`] statistics, a required statistic is
///   absent or not a whole number in range, or an abbreviation repeats.
pub fn normalize(payload: &StandingsPayload) -> Result<StandingsTable> {
    let season_label = payload
        .data
        .season_display
        .clone()
        .ok_or_else(|| FootyError::schema("missing data.seasonDisplay"))?;

    if payload.data.standings.is_empty() {
        return Err(FootyError::EmptyResult { season_label });
    }

    let rows = payload
        .data
        .standings
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_entry(index, entry))
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !seen.insert(row.abbreviation.as_str()) {
            return Err(FootyError::schema(format!(
                "duplicate team abbreviation {}",
                row.abbreviation
            )));
        }
    }

    debug!(season = %season_label, rows = rows.len(), "normalized standings");
    Ok(StandingsTable { season_label, rows })
}

fn normalize_entry(index: usize, entry: &StandingEntry) -> Result<StandingsRow> {
    let stats = &entry.stats;
    let team = &entry.team.abbreviation;

    if stats.len() < MIN_STATS_PER_TEAM {
        return Err(FootyError::schema(format!(
            "standings[{index}] ({team}) has {} statistics, expected at least {MIN_STATS_PER_TEAM}",
            stats.len()
        )));
    }

    let lookup = StatLookup::for_stats(stats);
    let count = |field| stat_value(stats, lookup, field).and_then(|v| as_count(v, field, team));

    Ok(StandingsRow {
        rank: count(StatField::Rank)?,
        team: entry.team.name.clone(),
        abbreviation: entry.team.abbreviation.clone(),
        points: as_points(stat_value(stats, lookup, StatField::Points)?, team)?,
        wins: count(StatField::Wins)?,
        draws: count(StatField::Draws)?,
        losses: count(StatField::Losses)?,
        played: count(StatField::Played)?,
        scored: count(StatField::Scored)?,
        conceded: count(StatField::Conceded)?,
    })
}

fn stat_value(stats: &[StatEntry], lookup: StatLookup, field: StatField) -> Result<f64> {
    let stat = match lookup {
        StatLookup::Labelled => stats.iter().find(|s| s.has_label(field.label())),
        StatLookup::Positional => stats.get(field.position()),
    };

    stat.and_then(|s| s.value).ok_or_else(|| {
        FootyError::schema(match lookup {
            StatLookup::Labelled => format!("missing statistic {}", field.label()),
            StatLookup::Positional => format!("missing value at statistic {}", field.position()),
        })
    })
}

fn whole_number(value: f64) -> Option<f64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value)
}

fn as_count(value: f64, field: StatField, team: &str) -> Result<u32> {
    whole_number(value)
        .filter(|v| (0.0..=f64::from(u32::MAX)).contains(v))
        .map(|v| v as u32)
        .ok_or_else(|| {
            FootyError::schema(format!(
                "{team}: {} must be a non-negative whole number, got {value}",
                field.label()
            ))
        })
}

fn as_points(value: f64, team: &str) -> Result<i32> {
    whole_number(value)
        .filter(|v| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
        .map(|v| v as i32)
        .ok_or_else(|| {
            FootyError::schema(format!("{team}: points must be a whole number, got {value}"))
        })
}
