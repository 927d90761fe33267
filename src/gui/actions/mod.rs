// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,refresh}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use refresh::{Refresh, refresh};

use crate::{gui::app::App, table::Table};

/// Which displayed table an export/copy applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    LeagueTable,
    TeamStats,
}

impl Target {
    pub fn file_stem(self) -> &'static str {
        match self {
            Target::LeagueTable => "north_liga_table",
            Target::TeamStats => "north_liga_team_stats",
        }
    }
}

#[inline]
pub(super) fn table_for(app: &App, target: Target) -> &Table {
    match target {
        Target::LeagueTable => &app.league_view,
        Target::TeamStats => &app.team_stats,
    }
}
