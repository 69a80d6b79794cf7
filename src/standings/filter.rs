//! Row selection over a normalized table.

use super::model::{FilterCriteria, StandingsTable};

/// Keep the rows `criteria` allows, in their original order.
///
/// An empty abbreviation set keeps nothing. The season label is carried
/// over unchanged.
pub fn filter(table: &StandingsTable, criteria: &FilterCriteria) -> StandingsTable {
    StandingsTable {
        season_label: table.season_label.clone(),
        rows: table
            .rows
            .iter()
            .filter(|row| criteria.allows(row))
            .cloned()
            .collect(),
    }
}
