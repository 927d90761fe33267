// src/ingest.rs
//
// Fetch + parse. Each call is one blocking GET followed by a pure parse in `specs`;
// nothing is cached here (see `runner` for the CSV snapshots).

use crate::core::net::Http;
use crate::core::sanitize::team_name_from_url;
use crate::error::IngestError;
use crate::model::{LeagueTable, TeamStats};
use crate::specs;
use crate::table::Table;

/// Scrape the league table page.
pub fn get_league_table(url: &str) -> Result<LeagueTable, IngestError> {
    let http = Http::with_defaults()?;
    get_league_table_with(&http, url)
}

pub fn get_league_table_with(http: &Http, url: &str) -> Result<LeagueTable, IngestError> {
    let doc = http.get(url)?;
    let lt = specs::league_table::parse(&doc, url)?;
    logf!("Ingest: league table {} teams from {}", lt.len(), url);
    Ok(lt)
}

/// Scrape one team page into a single-row table (`TEAM_PAGE_COLUMNS`).
///
/// The team name is taken from the URL slug. With a league table the
/// abbreviation is resolved by name, otherwise `Abbr` is Null.
pub fn parse_team_page_wide(url: &str, league: Option<&LeagueTable>) -> Result<Table, IngestError> {
    let http = Http::with_defaults()?;
    Ok(TeamStats::to_table(&[team_stats_with(&http, url, league)?]))
}

/// Typed form of `parse_team_page_wide`, reusing a client.
pub fn team_stats_with(http: &Http, url: &str, league: Option<&LeagueTable>) -> Result<TeamStats, IngestError> {
    let team = team_name_from_url(url);
    let abbr = league.and_then(|lt| lt.find_abbr(&team));
    if league.is_some() && abbr.is_none() {
        logw!("Ingest: no abbreviation for '{}' in league table", team);
    }

    let doc = http.get(url)?;
    let stats = specs::team_page::parse(&doc, &team, abbr, url)?;
    logd!("Ingest: team page '{}' parsed", team);
    Ok(stats)
}
