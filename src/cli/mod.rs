//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{OutputFormat, Season};

/// Cache behaviour shared by every command that talks to the API
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CacheFlags {
    /// Force refresh from the API, overwriting any cached response.
    #[clap(long)]
    pub refresh: bool,

    /// Keep responses in memory only; never read or write the cache directory.
    #[clap(long)]
    pub no_cache: bool,
}

/// Standings selection: which league/season, then which rows.
#[derive(Debug, Args)]
pub struct StandingsFilters {
    /// League code (`eng.1`) or display name (`English Premier League`).
    /// Defaults to the English Premier League.
    #[clap(long, short)]
    pub league: Option<String>,

    /// Season start year (e.g. 2022 for 2022-23). Defaults to last year.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Keep only these team abbreviations (repeatable): `-t ARS -t CHE`.
    #[clap(long = "team", short = 't')]
    pub teams: Option<Vec<String>>,

    /// Keep only rows ranked at or above this position.
    #[clap(long, short = 'r')]
    pub max_rank: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the leagues the standings API knows about
    Leagues {
        #[clap(flatten)]
        cache: CacheFlags,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// List the selectable seasons, newest (the default) first
    Seasons,

    /// Fetch, filter and display one league's standings for a season.
    ///
    /// Without filters every team is shown. Filters combine: a row must
    /// match a selected team AND be within the rank threshold.
    Standings {
        #[clap(flatten)]
        filters: StandingsFilters,

        #[clap(flatten)]
        cache: CacheFlags,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "footy", about = "Football league standings explorer")]
pub struct Footy {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standings_with_filters() {
        let app = Footy::try_parse_from([
            "footy",
            "standings",
            "--league",
            "esp.1",
            "--season",
            "2022",
            "-t",
            "RMA",
            "-t",
            "BAR",
            "--max-rank",
            "4",
            "--format",
            "csv",
        ])
        .unwrap();

        match app.command {
            Commands::Standings {
                filters,
                cache,
                format,
                output,
            } => {
                assert_eq!(filters.league.as_deref(), Some("esp.1"));
                assert_eq!(filters.season, Some(Season::new(2022)));
                assert_eq!(
                    filters.teams,
                    Some(vec!["RMA".to_string(), "BAR".to_string()])
                );
                assert_eq!(filters.max_rank, Some(4));
                assert_eq!(format, OutputFormat::Csv);
                assert!(output.is_none());
                assert!(!cache.refresh);
                assert!(!cache.no_cache);
            }
            other => panic!("Expected Standings, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_standings_defaults() {
        let app = Footy::try_parse_from(["footy", "standings"]).unwrap();
        match app.command {
            Commands::Standings {
                filters, format, ..
            } => {
                assert!(filters.league.is_none());
                assert!(filters.season.is_none());
                assert!(filters.teams.is_none());
                assert!(filters.max_rank.is_none());
                assert_eq!(format, OutputFormat::Table);
            }
            other => panic!("Expected Standings, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_season() {
        assert!(Footy::try_parse_from(["footy", "standings", "--season", "22-23"]).is_err());
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let app = Footy::try_parse_from(["footy", "leagues", "-vv", "--refresh"]).unwrap();
        assert_eq!(app.verbose, 2);
        match app.command {
            Commands::Leagues { cache, json } => {
                assert!(cache.refresh);
                assert!(!json);
            }
            other => panic!("Expected Leagues, got {:?}", other),
        }
    }
}
