// tests/common/mod.rs
//
// Shared fixtures: a three-team league and matching team pages.
//
#![allow(dead_code)]

use corn_stats::model::{LeagueTable, PerGame, Rebounds, Shooting, Standing, TeamStats};

pub fn standing(position: u32, team: &str, abbr: &str, wins: i64, losses: i64) -> Standing {
    let games = wins + losses;
    Standing {
        position,
        team: team.into(),
        abbr: Some(abbr.into()),
        points: 2 * wins + losses,
        wins,
        losses,
        scored: 72 * games,
        allowed: 68 * games,
    }
}

pub fn league() -> LeagueTable {
    LeagueTable {
        standings: vec![
            standing(1, "Ravens Belgrade", "RAV", 7, 1),
            standing(2, "KK Pistacci", "PIS", 4, 4),
            standing(3, "Blue Hawks", "BLH", 1, 7),
        ],
    }
}

fn shooting(made: f64, att: f64) -> Option<Shooting> {
    Some(Shooting { att_avg: att / 8.0, made_avg: made / 8.0, att_tot: att, made_tot: made })
}

fn per_game(tot: f64) -> Option<PerGame> {
    Some(PerGame { avg: tot / 8.0, tot })
}

pub fn page(team: &str, abbr: Option<&str>) -> TeamStats {
    TeamStats {
        team: team.into(),
        abbr: abbr.map(Into::into),
        fg: shooting(200.0, 450.0),
        two: shooting(150.0, 290.0),
        three: shooting(50.0, 160.0),
        ft: shooting(76.0, 110.0),
        reb: Some(Rebounds { orb_avg: 10.0, drb_avg: 25.0, orb_tot: 80.0, drb_tot: 200.0 }),
        ast: per_game(120.0),
        tov: per_game(100.0),
        stl: per_game(60.0),
        blk: per_game(20.0),
        pfd: per_game(140.0),
    }
}

pub fn raw_pages() -> Vec<TeamStats> {
    vec![
        page("ravens-belgrade", Some("RAV")),
        page("kk-pistacci", Some("PIS")),
        page("unknown-club", None),
    ]
}
