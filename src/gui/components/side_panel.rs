// src/gui/components/side_panel.rs
//
// Left panel: refresh buttons, export controls, glossary.

use eframe::egui::{self, RichText};

use crate::config::options::ExportFormat;
use crate::glossary;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Data controls");
    ui.add_space(4.0);

    let full = egui::vec2(ui.available_width(), 0.0);
    if ui.add_sized(full, egui::Button::new("Refresh league table")).clicked() {
        actions::refresh(app, actions::Refresh::All);
    }
    if ui.add_sized(full, egui::Button::new("Refresh team stats")).clicked() {
        actions::refresh(app, actions::Refresh::TeamStats);
    }

    ui.separator();
    export_section(ui, app);
    ui.separator();

    egui::CollapsingHeader::new("📖 Glossary")
        .default_open(app.state.gui.show_glossary)
        .show(ui, |ui| {
            egui::ScrollArea::vertical().id_salt("glossary_scroll").show(ui, |ui| {
                let (ordered, other) = glossary::entries();
                for (name, text) in ordered {
                    entry(ui, name, text);
                }
                if !other.is_empty() {
                    ui.add_space(6.0);
                    ui.strong("Other metrics");
                    for (name, text) in other {
                        entry(ui, name, text);
                    }
                }
            });
        });
}

fn entry(ui: &mut egui::Ui, name: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(name).strong());
        ui.label(text);
    });
}

fn export_section(ui: &mut egui::Ui, app: &mut App) {
    ui.collapsing("Download data", |ui| {
        let export = &mut app.state.options.export;
        ui.horizontal(|ui| {
            ui.radio_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.radio_value(&mut export.format, ExportFormat::Tsv, "TSV");
        });
        ui.checkbox(&mut export.include_headers, "Include headers");

        ui.label("Output folder");
        ui.text_edit_singleline(&mut app.out_dir_text);

        ui.horizontal(|ui| {
            if ui.button("League table").clicked() {
                actions::export(app, actions::Target::LeagueTable);
            }
            if ui.button("Team stats").clicked() {
                actions::export(app, actions::Target::TeamStats);
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Copy league table").clicked() {
                actions::copy(ui.ctx(), app, actions::Target::LeagueTable);
            }
            if ui.button("Copy team stats").clicked() {
                actions::copy(ui.ctx(), app, actions::Target::TeamStats);
            }
        });
    });
}
