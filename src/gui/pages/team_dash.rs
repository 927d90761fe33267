// src/gui/pages/team_dash.rs
//
// Seven league-wide team charts.

use eframe::egui;

use crate::gui::{app::App, components::chart};

use super::Page;

const HEADINGS: [&str; 7] = [
    "1. Pace of Teams",
    "2. Points vs Field Goal %",
    "3. Shooting Strategy: 2-Point vs 3-Point Attempts",
    "4. Free Throw Frequency vs Efficiency",
    "5. Shot Distribution by Team",
    "6. Rebounding Profile: Offensive vs Defensive Rebound %",
    "7. Teams by Net Rating",
];

pub struct TeamDashPage;
pub static PAGE: TeamDashPage = TeamDashPage;

impl Page for TeamDashPage {
    fn title(&self) -> &'static str { "Team Dashboard" }

    fn on_enter(&self, app: &mut App) {
        let ok = app.dashboard_charts.iter().filter(|c| c.is_ok()).count();
        logd!("UI: team dashboard {}/{} charts available", ok, app.dashboard_charts.len());
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.team_stats.is_empty() {
            ui.label("No team statistics available yet. Use \"Refresh team stats\".");
            return;
        }

        let charts = app.dashboard_charts.clone();
        egui::ScrollArea::vertical().id_salt("team_dash_scroll").show(ui, |ui| {
            for (heading, spec) in HEADINGS.iter().zip(&charts) {
                ui.heading(*heading);
                match spec {
                    Ok(spec) => chart::draw(ui, spec, &mut app.logos),
                    Err(e) => {
                        ui.label(format!("Chart unavailable: {e}"));
                    }
                }
                ui.add_space(16.0);
            }
        });
    }
}
