//! Standings command: resolve → fetch → normalize → filter → render.

use std::{io::Write, path::PathBuf};

use tracing::{debug, info, warn};

use super::{
    common::{describe_cache_status, open_output, CommandContext},
    render,
};
use crate::{
    api::{load_or_fetch_standings, resolve_league},
    cli::{types::OutputFormat, CacheFlags},
    core::CacheStatus,
    models::output::StandingsReport,
    standings::{filter, normalize, FilterCriteria, LeagueEntry, StandingsTable},
    Result, Season, SeasonRange,
};

/// Parameters for the standings command
#[derive(Debug, Clone, Default)]
pub struct StandingsParams {
    /// League code or display name; `None` means the default league.
    pub league: Option<String>,
    /// `None` means the most recent selectable season.
    pub season: Option<Season>,
    /// `None` selects every team.
    pub teams: Option<Vec<String>>,
    /// `None` selects every rank.
    pub max_rank: Option<u32>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub cache: CacheFlags,
}

/// Everything the renderers need for one invocation
#[derive(Debug, Clone)]
pub struct StandingsView {
    pub league: LeagueEntry,
    pub season: Season,
    /// The normalized table before filtering.
    pub full: StandingsTable,
    pub filtered: StandingsTable,
    pub cache_status: CacheStatus,
}

/// Handle the standings command
pub async fn handle_standings(params: StandingsParams) -> Result<()> {
    let ctx = CommandContext::new(params.cache)?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    let view = load_standings_view(&ctx, &params, SeasonRange::current()).await?;
    debug!(memory = ?ctx.cache.memory_stats(), "cache usage (entries, capacity)");

    let mut out = open_output(params.output.as_deref())?;
    render_standings(&mut out, &view, params.format)?;
    out.flush()?;

    if let Some(path) = &params.output {
        info!(path = %path.display(), format = %params.format, "standings written");
    }
    Ok(())
}

/// Run the data pipeline for `params`; `seasons` bounds which seasons are
/// accepted.
pub async fn load_standings_view(
    ctx: &CommandContext,
    params: &StandingsParams,
    seasons: SeasonRange,
) -> Result<StandingsView> {
    let season = match params.season {
        Some(season) => seasons.validate(season)?,
        None => seasons.default_season(),
    };

    let league = resolve_league(&ctx.client, &ctx.cache, params.league.as_deref(), ctx.refresh).await?;
    let (payload, cache_status) =
        load_or_fetch_standings(&ctx.client, &ctx.cache, &league.code, season, ctx.refresh).await?;
    info!(
        league = %league.code,
        %season,
        source = describe_cache_status(cache_status),
        "standings loaded"
    );

    let full = normalize(&payload)?;

    if let Some(teams) = &params.teams {
        let known = full.abbreviations();
        for team in teams.iter().filter(|t| !known.contains(*t)) {
            warn!(team = %team, "team abbreviation not in this season's standings");
        }
    }

    let criteria = FilterCriteria::from_selection(&full, params.teams.clone(), params.max_rank);
    let filtered = filter(&full, &criteria);
    info!(
        kept = filtered.len(),
        total = full.len(),
        max_rank = criteria.max_rank,
        "standings filtered"
    );

    Ok(StandingsView {
        league,
        season,
        full,
        filtered,
        cache_status,
    })
}

/// Write the filtered table in `format`.
pub fn render_standings<W: Write>(
    out: &mut W,
    view: &StandingsView,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => render::write_table(out, &view.filtered),
        OutputFormat::Csv => render::write_csv(out, &view.filtered),
        OutputFormat::Json => render::write_json(
            out,
            &StandingsReport::new(
                view.league.code.as_str(),
                &view.league.display_name,
                view.season.as_u16(),
                &view.filtered,
            ),
        ),
        OutputFormat::Scatter => render::write_scatter(out, &view.filtered),
    }
}
