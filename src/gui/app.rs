// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    error::MissingColumnError,
    model::LeagueTable,
    table::Table,
    viz::{self, ChartSpec},
};

use super::{actions, logos::LogoCache, pages::Page, router};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Corn Liga North",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::with_options(app_options))))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Banner above the page content; stays until replaced or dismissed.
#[derive(Clone, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

pub type ChartResult = Result<ChartSpec, MissingColumnError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // data currently shown; kept when a refresh fails
    pub league: LeagueTable,
    pub league_view: Table,
    pub team_stats: Table,

    // charts derived from team_stats (rebuilt in set_team_stats)
    pub dashboard_charts: Vec<ChartResult>,
    pub ratings_chart: Option<ChartResult>,

    pub logos: LogoCache,

    // output dir text field (mapped to ExportOptions on export)
    pub out_dir_text: String,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        let logos = LogoCache::new(state.options.data.logo_dirs.clone());

        let mut app = Self {
            state,
            league: LeagueTable::default(),
            league_view: Table::default(),
            team_stats: Table::default(),
            dashboard_charts: Vec::new(),
            ratings_chart: None,
            logos,
            out_dir_text,
            status: Arc::new(Mutex::new(s!("Idle"))),
            notice: None,
        };

        // Snapshots when present, otherwise a first fetch.
        actions::refresh(&mut app, actions::Refresh::Load);
        logf!(
            "Init: teams={}, stats rows={}, page={}",
            app.league.len(),
            app.team_stats.row_count(),
            app.current_page().title()
        );
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.notice = Some(Notice { severity, text: text.into() });
    }

    pub fn set_league(&mut self, league: LeagueTable) {
        self.league_view = league.to_table();
        self.league = league;
    }

    pub fn set_team_stats(&mut self, stats: Table) {
        self.dashboard_charts = viz::team_dashboard_charts(&stats);
        self.ratings_chart = Some(viz::ratings_chart(&stats));
        self.team_stats = stats;

        // Keep the selected team if it still exists.
        let names = self.team_names();
        let keep = self.state.gui.selected_team.as_ref().is_some_and(|t| names.contains(t));
        if !keep {
            self.state.gui.selected_team = names.into_iter().next();
        }
    }

    /// Team names in the stats table, sorted.
    pub fn team_names(&self) -> Vec<String> {
        let mut names = self.team_stats.texts("Team").unwrap_or_default();
        names.sort();
        names.dedup();
        names
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                super::components::side_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            super::components::notice::draw(ui, self);

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
