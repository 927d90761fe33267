// src/model.rs
//
// Typed records produced by the page parsers. Both lower into `Table` rows,
// which is what the feature engine, the store and the charts consume.

use crate::core::sanitize::normalize_name;
use crate::error::MissingColumnError;
use crate::table::{Table, Value};

/// One league-table row.
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    /// 1-based standings position.
    pub position: u32,
    pub team: String,
    pub abbr: Option<String>,
    pub points: i64,
    pub wins: i64,
    pub losses: i64,
    pub scored: i64,
    pub allowed: i64,
}

fn per_game(total: i64, games: i64) -> Option<f64> {
    if games > 0 {
        Some(((total as f64 / games as f64) * 10.0).round() / 10.0)
    } else {
        None
    }
}

impl Standing {
    pub fn games(&self) -> i64 { self.wins + self.losses }
    pub fn points_diff(&self) -> i64 { self.scored - self.allowed }
    pub fn pts_scored_avg(&self) -> Option<f64> { per_game(self.scored, self.games()) }
    pub fn pts_allowed_avg(&self) -> Option<f64> { per_game(self.allowed, self.games()) }
}

pub const LEAGUE_TABLE_COLUMNS: &[&str] = &[
    "Position", "Team", "Points", "Wins", "Losses", "Scored", "Allowed",
    "Games", "Points_Diff", "Pts_Scored_Avg", "Pts_Allowed_Avg", "Abbr",
];

/// Standings in table order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeagueTable {
    pub standings: Vec<Standing>,
}

impl LeagueTable {
    pub fn len(&self) -> usize { self.standings.len() }
    pub fn is_empty(&self) -> bool { self.standings.is_empty() }

    pub fn to_table(&self) -> Table {
        let mut t = Table::new(LEAGUE_TABLE_COLUMNS.iter().map(|c| s!(*c)).collect());
        for st in &self.standings {
            t.push_row(vec![
                Value::Num(st.position as f64),
                Value::Text(st.team.clone()),
                Value::Num(st.points as f64),
                Value::Num(st.wins as f64),
                Value::Num(st.losses as f64),
                Value::Num(st.scored as f64),
                Value::Num(st.allowed as f64),
                Value::Num(st.games() as f64),
                Value::Num(st.points_diff() as f64),
                Value::opt(st.pts_scored_avg()),
                Value::opt(st.pts_allowed_avg()),
                st.abbr.clone().map(Value::Text).unwrap_or(Value::Null),
            ]);
        }
        t
    }

    /// Rebuild from a stored snapshot. Derived columns are recomputed.
    pub fn from_table(t: &Table) -> Result<Self, MissingColumnError> {
        t.require(
            &["Position", "Team", "Points", "Wins", "Losses", "Scored", "Allowed"],
            "LeagueTable::from_table",
        )?;
        let int = |row: usize, col: &str| -> i64 {
            t.get(row, col).and_then(Value::as_f64).map(|v| v as i64).unwrap_or(0)
        };
        let standings = (0..t.row_count())
            .map(|r| Standing {
                position: int(r, "Position").max(0) as u32,
                team: t.get(r, "Team").map(|v| v.to_string()).unwrap_or_default(),
                abbr: t
                    .get(r, "Abbr")
                    .filter(|v| !v.is_null())
                    .map(|v| v.to_string()),
                points: int(r, "Points"),
                wins: int(r, "Wins"),
                losses: int(r, "Losses"),
                scored: int(r, "Scored"),
                allowed: int(r, "Allowed"),
            })
            .collect();
        Ok(Self { standings })
    }

    /// Abbreviation for a team name: exact match on the normalized name first,
    /// then containment in either direction.
    pub fn find_abbr(&self, team_name: &str) -> Option<String> {
        let wanted = normalize_name(team_name);
        let exact = self
            .standings
            .iter()
            .find(|st| normalize_name(&st.team) == wanted);
        let hit = exact.or_else(|| {
            self.standings.iter().find(|st| {
                let have = normalize_name(&st.team);
                have.contains(&wanted) || wanted.contains(&have)
            })
        });
        hit.and_then(|st| st.abbr.clone())
    }

    pub fn team_names(&self) -> Vec<String> {
        self.standings.iter().map(|st| st.team.clone()).collect()
    }
}

/// Attempts/made block of a shooting section, per game and season total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shooting {
    pub att_avg: f64,
    pub made_avg: f64,
    pub att_tot: f64,
    pub made_tot: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rebounds {
    pub orb_avg: f64,
    pub drb_avg: f64,
    pub orb_tot: f64,
    pub drb_tot: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerGame {
    pub avg: f64,
    pub tot: f64,
}

/// Raw box-score numbers from one team page. Sections the page didn't have
/// are None and end up as Null cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamStats {
    pub team: String,
    pub abbr: Option<String>,
    pub fg: Option<Shooting>,
    pub two: Option<Shooting>,
    pub three: Option<Shooting>,
    pub ft: Option<Shooting>,
    pub reb: Option<Rebounds>,
    pub ast: Option<PerGame>,
    pub tov: Option<PerGame>,
    pub stl: Option<PerGame>,
    pub blk: Option<PerGame>,
    pub pfd: Option<PerGame>,
}

pub const TEAM_PAGE_COLUMNS: &[&str] = &[
    "Team", "Abbr",
    "FGA_Avg", "FGM_Avg", "FGA_Tot", "FGM_Tot",
    "2PA_Avg", "2PM_Avg", "2PA_Tot", "2PM_Tot",
    "3PA_Avg", "3PM_Avg", "3PA_Tot", "3PM_Tot",
    "FTA_Avg", "FTM_Avg", "FTA_Tot", "FTM_Tot",
    "ORB_Avg", "DRB_Avg", "ORB_Tot", "DRB_Tot",
    "AST_Avg", "AST_Tot",
    "TO_Avg", "TO_Tot",
    "STL_Avg", "STL_Tot",
    "BLK_Avg", "BLK_Tot",
    "PFD_Avg", "PFD_Tot",
];

impl TeamStats {
    /// Cells in `TEAM_PAGE_COLUMNS` order.
    pub fn to_row(&self) -> Vec<Value> {
        let mut row = vec![
            Value::Text(self.team.clone()),
            self.abbr.clone().map(Value::Text).unwrap_or(Value::Null),
        ];
        for sh in [self.fg, self.two, self.three, self.ft] {
            match sh {
                Some(s) => row.extend([s.att_avg, s.made_avg, s.att_tot, s.made_tot].map(Value::num)),
                None => row.extend([Value::Null, Value::Null, Value::Null, Value::Null]),
            }
        }
        match self.reb {
            Some(r) => row.extend([r.orb_avg, r.drb_avg, r.orb_tot, r.drb_tot].map(Value::num)),
            None => row.extend([Value::Null, Value::Null, Value::Null, Value::Null]),
        }
        for pg in [self.ast, self.tov, self.stl, self.blk, self.pfd] {
            match pg {
                Some(p) => row.extend([Value::num(p.avg), Value::num(p.tot)]),
                None => row.extend([Value::Null, Value::Null]),
            }
        }
        row
    }

    pub fn to_table(all: &[TeamStats]) -> Table {
        let mut t = Table::new(TEAM_PAGE_COLUMNS.iter().map(|c| s!(*c)).collect());
        for ts in all {
            t.push_row(ts.to_row());
        }
        t
    }
}
