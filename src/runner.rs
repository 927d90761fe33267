// src/runner.rs
//
// Load-or-refresh pipeline shared by the GUI and the CLI.
//
// League table:  snapshot CSV, or scrape + save.
// Team stats:    processed snapshot CSV, or scrape every team page, save the raw
//                rows, join with the league table on `Abbr`, compute metrics,
//                order columns, save.
//
// A failing team page aborts the refresh; previously saved snapshots are left
// untouched in that case.

use crate::config::consts::TEAM_STATS_COLUMN_ORDER;
use crate::config::options::AppOptions;
use crate::core::net::Http;
use crate::error::Result;
use crate::features::calculate_all_advanced_stats;
use crate::ingest;
use crate::model::{LeagueTable, TeamStats};
use crate::progress::Progress;
use crate::store;
use crate::table::Table;

/// League table from the snapshot, or from the site when `force_refresh` is
/// set or no snapshot exists.
pub fn load_league_table(opts: &AppOptions, force_refresh: bool) -> Result<LeagueTable> {
    let path = &opts.data.league_table;
    if !force_refresh {
        if let Some(t) = store::load_if_present(path)? {
            logf!("Runner: league table from cache {}", path.display());
            return Ok(LeagueTable::from_table(&t)?);
        }
    }

    let http = Http::new(opts.source.timeout())?;
    let lt = ingest::get_league_table_with(&http, &opts.source.table_url)?;
    store::save_table(path, &lt.to_table())?;
    Ok(lt)
}

/// Scrape every configured team page into the raw per-team table.
pub fn fetch_raw_team_stats(
    opts: &AppOptions,
    league: &LeagueTable,
    progress: &mut dyn Progress,
) -> Result<Table> {
    let http = Http::new(opts.source.timeout())?;
    let slugs = &opts.source.teams;

    progress.begin(slugs.len());
    let mut all = Vec::with_capacity(slugs.len());
    for slug in slugs {
        let url = opts.source.team_url(slug);
        progress.log(&join!("Fetching ", slug));
        match ingest::team_stats_with(&http, &url, Some(league)) {
            Ok(ts) => all.push(ts),
            Err(e) => {
                loge!("Runner: team page {} failed: {}", url, e);
                progress.finish();
                return Err(e.into());
            }
        }
        progress.item_done(slug);
    }
    progress.finish();

    Ok(TeamStats::to_table(&all))
}

/// League table ⋈ raw team rows on `Abbr`, plus every advanced metric, in
/// display column order. The raw side's `Team` (URL-derived) is dropped in
/// favor of the league table's display name.
pub fn build_team_stats(league: &LeagueTable, raw: &Table) -> Result<Table> {
    let mut raw = raw.clone();
    raw.drop_column("Team");

    let joined = league.to_table().inner_join(&raw, "Abbr")?;
    if joined.row_count() < raw.row_count() {
        logw!(
            "Runner: {} of {} team rows matched the league table",
            joined.row_count(),
            raw.row_count()
        );
    }

    let advanced = calculate_all_advanced_stats(&joined)?;
    Ok(advanced.reorder(TEAM_STATS_COLUMN_ORDER))
}

/// Team stats from the processed snapshot, or a full scrape + recompute.
pub fn load_team_stats(
    opts: &AppOptions,
    league: &LeagueTable,
    force_refresh: bool,
    progress: &mut dyn Progress,
) -> Result<Table> {
    let path = &opts.data.team_stats;
    if !force_refresh {
        if let Some(t) = store::load_if_present(path)? {
            logf!("Runner: team stats from cache {}", path.display());
            return Ok(t.reorder(TEAM_STATS_COLUMN_ORDER));
        }
    }

    let raw = fetch_raw_team_stats(opts, league, progress)?;
    store::save_table(&opts.data.raw_team_stats, &raw)?;

    let stats = build_team_stats(league, &raw)?;
    store::save_table(path, &stats)?;
    logf!("Runner: {} teams with advanced stats", stats.row_count());
    Ok(stats)
}

/// Recompute metrics from the raw snapshot without touching the network.
pub fn rebuild_from_raw(opts: &AppOptions, league: &LeagueTable) -> Result<Option<Table>> {
    let Some(raw) = store::load_if_present(&opts.data.raw_team_stats)? else {
        return Ok(None);
    };
    let stats = build_team_stats(league, &raw)?;
    store::save_table(&opts.data.team_stats, &stats)?;
    Ok(Some(stats))
}
