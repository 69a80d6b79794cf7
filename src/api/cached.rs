//! Cache-aware wrappers around [`StandingsClient`].
//!
//! Read the cache first unless `refresh` is set; on a miss (or refresh)
//! fetch from the API and store the response for next time. Fetch errors
//! are never cached.

use tracing::info;

use super::{http::StandingsClient, types::StandingsPayload};
use crate::{
    core::cache::{CacheManager, CacheStatus, LeaguesCacheKey, StandingsCacheKey},
    error::{FootyError, Result},
    standings::LeagueEntry,
    LeagueCode, Season,
};

/// League directory, from cache when possible.
pub async fn load_or_fetch_leagues(
    client: &StandingsClient,
    cache: &CacheManager,
    refresh: bool,
) -> Result<(Vec<LeagueEntry>, CacheStatus)> {
    if !refresh {
        if let Some(leagues) = cache.leagues.get(&LeaguesCacheKey) {
            info!(leagues = leagues.len(), "league directory loaded from cache");
            return Ok((leagues, CacheStatus::Hit));
        }
    }

    let leagues = client.fetch_leagues().await?;
    info!(leagues = leagues.len(), "league directory fetched");
    cache.leagues.put(LeaguesCacheKey, leagues.clone());

    Ok((leagues, status_for(refresh)))
}

/// Raw standings payload for `(league, season)`, from cache when possible.
pub async fn load_or_fetch_standings(
    client: &StandingsClient,
    cache: &CacheManager,
    league: &LeagueCode,
    season: Season,
    refresh: bool,
) -> Result<(StandingsPayload, CacheStatus)> {
    let key = StandingsCacheKey::new(league, season);

    if !refresh {
        if let Some(payload) = cache.standings.get(&key) {
            info!(%league, %season, "standings loaded from cache");
            return Ok((payload, CacheStatus::Hit));
        }
    }

    let payload = client.fetch_standings(league, season).await?;
    info!(%league, %season, teams = payload.data.standings.len(), "standings fetched");
    cache.standings.put(key, payload.clone());

    Ok((payload, status_for(refresh)))
}

/// Turn user input (a code or a display name) into a league code.
///
/// The default league is used as-is without consulting the directory.
pub async fn resolve_league(
    client: &StandingsClient,
    cache: &CacheManager,
    league: Option<&str>,
    refresh: bool,
) -> Result<LeagueEntry> {
    let Some(query) = league.map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(default_league());
    };

    let (leagues, _) = load_or_fetch_leagues(client, cache, refresh).await?;
    find_league(&leagues, query)
        .cloned()
        .ok_or_else(|| FootyError::LeagueNotFound {
            league: query.to_string(),
        })
}

/// Exact code match wins over a display-name match.
pub fn find_league<'a>(leagues: &'a [LeagueEntry], query: &str) -> Option<&'a LeagueEntry> {
    let query = query.trim();
    leagues
        .iter()
        .find(|entry| entry.code.as_str() == query)
        .or_else(|| leagues.iter().find(|entry| entry.matches(query)))
}

pub fn default_league() -> LeagueEntry {
    LeagueEntry {
        code: LeagueCode::default(),
        display_name: crate::DEFAULT_LEAGUE_NAME.to_string(),
    }
}

fn status_for(refresh: bool) -> CacheStatus {
    if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league(code: &str, name: &str) -> LeagueEntry {
        LeagueEntry {
            code: LeagueCode::new(code),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_find_league_by_code_and_name() {
        let leagues = vec![
            league("eng.1", "English Premier League"),
            league("esp.1", "Spanish Primera División"),
        ];

        assert_eq!(find_league(&leagues, "esp.1").unwrap().code.as_str(), "esp.1");
        assert_eq!(
            find_league(&leagues, "english premier league").unwrap().code.as_str(),
            "eng.1"
        );
        assert!(find_league(&leagues, "ger.1").is_none());
    }

    #[test]
    fn test_find_league_prefers_code_match() {
        // A league whose display name collides with another's code
        let leagues = vec![league("x.2", "x.1"), league("x.1", "Real X League")];
        assert_eq!(find_league(&leagues, "x.1").unwrap().code.as_str(), "x.1");
    }

    #[test]
    fn test_default_league_is_premier_league() {
        let entry = default_league();
        assert_eq!(entry.code.as_str(), "eng.1");
        assert_eq!(entry.display_name, "English Premier League");
    }

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(true), CacheStatus::Refreshed);
        assert_eq!(status_for(false), CacheStatus::Miss);
    }
}
