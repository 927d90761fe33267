// src/gui/pages/standings.rs
//
// League standings, one team's transposed stats, and the ratings scatter.

use eframe::egui;

use crate::gui::{app::App, components::{chart, data_table}};

use super::Page;

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

impl Page for StandingsPage {
    fn title(&self) -> &'static str { "Standings" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::ScrollArea::vertical().id_salt("standings_scroll").show(ui, |ui| {
            ui.heading("Corn Liga North");
            ui.label(
                "Analytics dashboard for the amateur Serbian basketball league, North division. \
                 Metric definitions are in the glossary.",
            );
            ui.hyperlink_to("Source: cornliga.com", &app.state.options.source.table_url);
            ui.add_space(8.0);

            ui.strong("League standings");
            if app.league_view.is_empty() {
                ui.label("No league table loaded yet.");
            } else {
                data_table::draw(ui, "league_table", &app.league_view);
            }
            ui.add_space(12.0);

            ui.strong("Team details");
            team_summary(ui, app);
            ui.add_space(12.0);

            ui.strong("Advanced metrics");
            match app.ratings_chart.clone() {
                Some(Ok(spec)) => chart::draw(ui, &spec, &mut app.logos),
                Some(Err(_)) | None => {
                    ui.label("The ratings scatter plot becomes available after advanced stats are computed.");
                }
            }
        });
    }
}

fn team_summary(ui: &mut egui::Ui, app: &mut App) {
    if app.team_stats.is_empty() {
        ui.label("No team statistics available yet.");
        return;
    }

    let names = app.team_names();
    let selected = app.state.gui.selected_team.clone().unwrap_or_default();
    egui::ComboBox::from_label("Select team")
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for name in &names {
                ui.selectable_value(&mut app.state.gui.selected_team, Some(name.clone()), name.as_str());
            }
        });

    let Some(team) = app.state.gui.selected_team.clone() else { return };
    let mut row = app.team_stats.filter_eq("Team", &team);
    if row.is_empty() {
        ui.label("Team data not found. Try refreshing the dataset.");
        return;
    }
    row.drop_column("Abbr");

    ui.label(egui::RichText::new(&team).size(16.0).strong());
    let pairs = row.transpose_row(0).into_iter().filter(|(c, _)| c != "Team").collect::<Vec<_>>();
    data_table::draw_pairs(ui, "team_summary", &pairs);
}
