//! Output selection types for CLI commands.

use std::fmt;

/// How filtered standings are written to stdout (or `--output`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rank-indexed table for the terminal
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Season label plus rows as JSON
    Json,
    /// Scatter-plot series: goals conceded (x) vs scored (y), sized by points
    Scatter,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Scatter => "scatter",
        };
        write!(f, "{}", s)
    }
}
