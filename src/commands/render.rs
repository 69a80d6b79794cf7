//! Writers for every output format. All of them take `impl Write` so the
//! same code serves stdout, `--output` files and tests.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use std::io::Write;

use crate::{
    error::Result,
    models::output::{CsvRecord, ScatterPoint, StandingsReport},
    standings::{LeagueEntry, StandingsTable},
};

/// CSV header, in column order.
pub const CSV_HEADERS: [&str; 10] = [
    "rank",
    "Teams",
    "Abbreviation",
    "Points",
    "Wins",
    "Draws",
    "Losses",
    "Played",
    "Scored",
    "Conceded",
];

const TABLE_HEADERS: [&str; 10] = [
    "Rank",
    "Team",
    "Abbreviation",
    "Points",
    "Wins",
    "Draws",
    "Losses",
    "Played",
    "Scored",
    "Conceded",
];

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Season banner followed by a rank-indexed table.
pub fn write_table<W: Write>(out: &mut W, table: &StandingsTable) -> Result<()> {
    writeln!(
        out,
        "Showing standings for the {} season",
        table.season_label
    )?;

    if table.is_empty() {
        writeln!(out, "No teams match the selected filters.")?;
        return Ok(());
    }

    let mut grid = styled_table();
    grid.set_header(TABLE_HEADERS.to_vec());
    for index in [0, 3, 4, 5, 6, 7, 8, 9] {
        if let Some(column) = grid.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in &table.rows {
        grid.add_row(vec![
            row.rank.to_string(),
            row.team.clone(),
            row.abbreviation.clone(),
            row.points.to_string(),
            row.wins.to_string(),
            row.draws.to_string(),
            row.losses.to_string(),
            row.played.to_string(),
            row.scored.to_string(),
            row.conceded.to_string(),
        ]);
    }

    writeln!(out, "{grid}")?;
    Ok(())
}

/// Header line plus one record per row; the header is written even when
/// no rows survive filtering.
pub fn write_csv<W: Write>(out: W, table: &StandingsTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(CSV_HEADERS)?;
    for row in &table.rows {
        writer.serialize(CsvRecord::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &StandingsReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Scatter-plot series, one point per row.
pub fn write_scatter<W: Write>(out: &mut W, table: &StandingsTable) -> Result<()> {
    let points: Vec<ScatterPoint<'_>> = table.rows.iter().map(ScatterPoint::from).collect();
    let json = serde_json::to_string_pretty(&points)?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn write_leagues_table<W: Write>(out: &mut W, leagues: &[LeagueEntry]) -> Result<()> {
    let mut grid = styled_table();
    grid.set_header(vec!["Code", "League"]);
    for league in leagues {
        grid.add_row(vec![league.code.to_string(), league.display_name.clone()]);
    }
    writeln!(out, "{grid}")?;
    Ok(())
}

pub fn write_leagues_json<W: Write>(out: &mut W, leagues: &[LeagueEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(leagues)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::StandingsRow;
    use crate::LeagueCode;

    fn sample_table() -> StandingsTable {
        StandingsTable::new(
            "2022-23",
            vec![
                StandingsRow {
                    rank: 1,
                    team: "Arsenal".to_string(),
                    abbreviation: "ARS".to_string(),
                    points: 65,
                    wins: 20,
                    draws: 5,
                    losses: 3,
                    played: 28,
                    scored: 60,
                    conceded: 25,
                },
                StandingsRow {
                    rank: 2,
                    team: "Brighton & Hove Albion".to_string(),
                    abbreviation: "BHA".to_string(),
                    points: 49,
                    wins: 14,
                    draws: 7,
                    losses: 6,
                    played: 27,
                    scored: 56,
                    conceded: 35,
                },
            ],
        )
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_table()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "rank,Teams,Abbreviation,Points,Wins,Draws,Losses,Played,Scored,Conceded",
                "1,Arsenal,ARS,65,20,5,3,28,60,25",
                "2,Brighton & Hove Albion,BHA,49,14,7,6,27,56,35",
            ]
        );
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let mut table = sample_table();
        table.rows[0].team = "Wolverhampton, Wanderers".to_string();

        let mut buf = Vec::new();
        write_csv(&mut buf, &table).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1,\"Wolverhampton, Wanderers\",ARS"));
    }

    #[test]
    fn test_write_csv_empty_table_keeps_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &StandingsTable::new("2022-23", vec![])).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            "rank,Teams,Abbreviation,Points,Wins,Draws,Losses,Played,Scored,Conceded"
        );
    }

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table(&mut buf, &sample_table()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Showing standings for the 2022-23 season\n"));
        assert!(text.contains("Rank"));
        assert!(text.contains("Arsenal"));
        assert!(text.contains("BHA"));
    }

    #[test]
    fn test_write_table_empty() {
        let mut buf = Vec::new();
        write_table(&mut buf, &StandingsTable::new("2020-21", vec![])).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("2020-21"));
        assert!(text.contains("No teams match"));
    }

    #[test]
    fn test_write_json() {
        let table = sample_table();
        let report = StandingsReport::new("eng.1", "English Premier League", 2022, &table);

        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["league"], "eng.1");
        assert_eq!(value["season"], 2022);
        assert_eq!(value["season_label"], "2022-23");
        assert_eq!(value["rows"][0]["abbreviation"], "ARS");
        assert_eq!(value["rows"][1]["points"], 49);
    }

    #[test]
    fn test_write_scatter() {
        let mut buf = Vec::new();
        write_scatter(&mut buf, &sample_table()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let points = value.as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["team"], "Arsenal");
        assert_eq!(points[0]["conceded"], 25);
        assert_eq!(points[0]["scored"], 60);
        assert_eq!(points[0]["points"], 65);
    }

    #[test]
    fn test_write_leagues() {
        let leagues = vec![LeagueEntry {
            code: LeagueCode::new("fra.1"),
            display_name: "French Ligue 1".to_string(),
        }];

        let mut buf = Vec::new();
        write_leagues_table(&mut buf, &leagues).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("fra.1"));
        assert!(text.contains("French Ligue 1"));

        let mut buf = Vec::new();
        write_leagues_json(&mut buf, &leagues).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["code"], "fra.1");
        assert_eq!(value[0]["display_name"], "French Ligue 1");
    }
}
