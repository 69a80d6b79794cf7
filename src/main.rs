//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use football_standings::{
    cli::{Commands, Footy},
    commands::{
        leagues::handle_leagues,
        seasons::handle_seasons,
        standings::{handle_standings, StandingsParams},
    },
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Footy::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Leagues { cache, json } => handle_leagues(cache, json)
            .await
            .context("failed to load the league directory")?,

        Commands::Seasons => handle_seasons()?,

        Commands::Standings {
            filters,
            cache,
            format,
            output,
        } => handle_standings(StandingsParams {
            league: filters.league,
            season: filters.season,
            teams: filters.teams,
            max_rank: filters.max_rank,
            format,
            output,
            cache,
        })
        .await
        .context("failed to load standings")?,
    }

    Ok(())
}
