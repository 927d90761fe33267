// src/gui/actions/refresh.rs
//
// Runs on the UI thread; the window is unresponsive until the fetch returns.
// Failures become a notice and the previously loaded tables stay on screen.

use crate::{
    error::Error,
    gui::{app::{App, Severity}, progress::GuiProgress},
    runner,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// Snapshots when present, the site otherwise.
    Load,
    /// Re-scrape team pages (league table from snapshot).
    TeamStats,
    /// Re-scrape everything.
    All,
}

fn describe(what: &str, e: &Error) -> (Severity, String) {
    if e.is_recoverable() {
        return (Severity::Warn, format!("Failed to download {what}: {e}"));
    }
    match e {
        Error::Feature(_) => (Severity::Error, format!("Unable to compute team statistics: {e}")),
        _ => (Severity::Error, format!("Failed to load {what}: {e}")),
    }
}

pub fn refresh(app: &mut App, what: Refresh) {
    let force_league = what == Refresh::All;
    let force_teams = matches!(what, Refresh::All | Refresh::TeamStats);
    logf!("Refresh: Begin {:?}", what);

    let opts = app.state.options.clone();

    match runner::load_league_table(&opts, force_league) {
        Ok(lt) => {
            app.status(format!("League table loaded ({} teams)", lt.len()));
            app.set_league(lt);
        }
        Err(e) => {
            loge!("Refresh: league table failed: {}", e);
            let (sev, msg) = describe("league table", &e);
            app.notify(sev, msg);
            app.status("League table unavailable");
            return;
        }
    }

    let mut prog = GuiProgress::new(app.status.clone());
    match runner::load_team_stats(&opts, &app.league, force_teams, &mut prog) {
        Ok(stats) => {
            logf!("Refresh: OK {:?}, teams={}", what, stats.row_count());
            app.status(format!(
                "League table loaded ({} teams), team stats for {} teams",
                app.league.len(),
                stats.row_count()
            ));
            app.set_team_stats(stats);
            if what != Refresh::Load {
                app.notify(Severity::Info, "Data refreshed");
            }
        }
        Err(e) => {
            loge!("Refresh: team stats failed: {}", e);
            let (sev, msg) = describe("team statistics", &e);
            app.notify(sev, msg);
        }
    }
}
