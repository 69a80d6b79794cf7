//! League directory command implementation

use std::io::{self, Write};

use tracing::info;

use super::{
    common::{describe_cache_status, CommandContext},
    render,
};
use crate::{api::load_or_fetch_leagues, cli::CacheFlags, Result};

/// Handle the leagues command
pub async fn handle_leagues(cache: CacheFlags, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(cache)?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    let (leagues, status) = load_or_fetch_leagues(&ctx.client, &ctx.cache, ctx.refresh).await?;
    info!(
        leagues = leagues.len(),
        source = describe_cache_status(status),
        "league directory loaded"
    );

    let mut out = io::stdout().lock();
    if as_json {
        render::write_leagues_json(&mut out, &leagues)?;
    } else {
        render::write_leagues_table(&mut out, &leagues)?;
    }
    out.flush()?;
    Ok(())
}
