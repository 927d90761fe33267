// tests/pipeline.rs
//
// League table + team pages → processed team stats, and the snapshot-backed
// runner paths that never touch the network.
//
mod common;

use std::path::PathBuf;

use common::{league, page, raw_pages, standing};

use corn_stats::config::consts::TEAM_STATS_COLUMN_ORDER;
use corn_stats::config::options::{AppOptions, DataPaths};
use corn_stats::model::{LeagueTable, TeamStats};
use corn_stats::progress::NullProgress;
use corn_stats::table::Value;
use corn_stats::{runner, store};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("corn_stats_{}_{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn build_joins_on_abbr_and_orders_columns() {
    let raw = TeamStats::to_table(&raw_pages());
    let stats = runner::build_team_stats(&league(), &raw).unwrap();

    // Unmatched page and team without a page both drop out.
    assert_eq!(stats.row_count(), 2);
    assert_eq!(stats.get(0, "Team"), Some(&Value::from("Ravens Belgrade")));
    assert_eq!(stats.get(1, "Abbr"), Some(&Value::from("PIS")));

    // Display name comes from the league table, not the URL slug.
    assert!(stats.texts("Team").unwrap().iter().all(|t| !t.contains('-')));

    let leading: Vec<&str> = stats.columns().iter().take(6).map(String::as_str).collect();
    assert_eq!(leading, &TEAM_STATS_COLUMN_ORDER[..6]);
    assert_eq!(stats.get(0, "Win_%"), Some(&Value::Num(7.0 / 8.0)));
    assert!(stats.get(0, "Net_Rating").and_then(Value::as_f64).is_some());
}

#[test]
fn cached_snapshots_load_without_network() {
    let dir = scratch("cached");
    let mut opts = AppOptions::default();
    opts.data = DataPaths::under(&dir);
    // Any fetch would fail fast against this.
    opts.source.table_url = "http://127.0.0.1:9/table".into();
    opts.source.teams_url = "http://127.0.0.1:9/teams".into();

    let lt = league();
    store::save_table(&opts.data.league_table, &lt.to_table()).unwrap();
    let stats = runner::build_team_stats(&lt, &TeamStats::to_table(&raw_pages())).unwrap();
    store::save_table(&opts.data.team_stats, &stats).unwrap();

    let loaded = runner::load_league_table(&opts, false).unwrap();
    assert_eq!(loaded, lt);

    let mut progress = NullProgress;
    let cached = runner::load_team_stats(&opts, &loaded, false, &mut progress).unwrap();
    assert_eq!(cached.columns(), stats.columns());
    assert_eq!(cached.row_count(), 2);
    assert_eq!(cached.get(1, "Team"), Some(&Value::from("KK Pistacci")));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failed_refresh_keeps_previous_snapshot() {
    let dir = scratch("failed");
    let mut opts = AppOptions::default();
    opts.data = DataPaths::under(&dir);
    opts.source.table_url = "http://127.0.0.1:9/table".into();
    opts.source.teams_url = "http://127.0.0.1:9/teams".into();
    opts.source.timeout_secs = 1;

    let lt = league();
    store::save_table(&opts.data.league_table, &lt.to_table()).unwrap();

    assert!(runner::load_league_table(&opts, true).is_err());
    let mut progress = NullProgress;
    assert!(runner::load_team_stats(&opts, &lt, true, &mut progress).is_err());

    // Snapshot untouched, no processed file written.
    assert_eq!(runner::load_league_table(&opts, false).unwrap(), lt);
    assert!(!opts.data.team_stats.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rebuild_from_raw_snapshot() {
    let dir = scratch("rebuild");
    let mut opts = AppOptions::default();
    opts.data = DataPaths::under(&dir);
    let lt = league();

    assert!(runner::rebuild_from_raw(&opts, &lt).unwrap().is_none());

    store::save_table(&opts.data.raw_team_stats, &TeamStats::to_table(&raw_pages())).unwrap();
    let rebuilt = runner::rebuild_from_raw(&opts, &lt).unwrap().unwrap();
    assert_eq!(rebuilt.row_count(), 2);
    assert!(opts.data.team_stats.is_file());

    let on_disk = store::load_table(&opts.data.team_stats).unwrap();
    assert_eq!(on_disk.columns(), rebuilt.columns());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn numeric_abbreviation_survives_snapshots() {
    let dir = scratch("numeric_abbr");
    let mut opts = AppOptions::default();
    opts.data = DataPaths::under(&dir);
    opts.source.table_url = "http://127.0.0.1:9/table".into();

    let lt = LeagueTable {
        standings: vec![
            standing(1, "Ravens Belgrade", "RAV", 5, 1),
            standing(2, "KK Tap 011", "011", 1, 5),
        ],
    };
    let raw = TeamStats::to_table(&[page("ravens-belgrade", Some("RAV")), page("kk-tap-011", Some("011"))]);
    assert_eq!(runner::build_team_stats(&lt, &raw).unwrap().row_count(), 2);

    store::save_table(&opts.data.league_table, &lt.to_table()).unwrap();
    store::save_table(&opts.data.raw_team_stats, &raw).unwrap();

    let reloaded = runner::load_league_table(&opts, false).unwrap();
    assert_eq!(reloaded.standings[1].abbr.as_deref(), Some("011"));
    assert_eq!(reloaded, lt);

    let rebuilt = runner::rebuild_from_raw(&opts, &reloaded).unwrap().unwrap();
    assert_eq!(rebuilt.row_count(), 2);
    assert_eq!(rebuilt.get(1, "Abbr"), Some(&Value::from("011")));

    let _ = std::fs::remove_dir_all(&dir);
}
