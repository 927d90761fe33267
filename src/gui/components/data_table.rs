// src/gui/components/data_table.rs
//
// Read-only table views over `Table`. Numbers are centered, text is left
// aligned; Null cells are blank.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::{Table, Value};

const ROW_H: f32 = 20.0;

/// Display form: integral numbers as-is, fractions to 3 places.
pub fn fmt_value(v: &Value) -> String {
    match v {
        Value::Num(n) if n.fract() != 0.0 => format!("{n:.3}"),
        other => other.to_string(),
    }
}

fn cell(ui: &mut egui::Ui, v: &Value) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
    let text = fmt_value(v);
    if matches!(v, Value::Num(_)) {
        ui.centered_and_justified(|ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    }
}

fn scroll_style(ui: &mut egui::Ui) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;
    s.bar_width = 10.0;
    s.handle_min_length = 48.0;
    let visuals = &mut ui.style_mut().visuals;
    visuals.extreme_bg_color = visuals.panel_fill;
}

pub fn draw(ui: &mut egui::Ui, id: &str, table: &Table) {
    let width_for = |name: &str| -> f32 {
        match name {
            "Team" => 160.0,
            _ => (name.chars().count() as f32 * 8.0 + 16.0).max(48.0),
        }
    };

    ui.scope(|ui| {
        scroll_style(ui);
        egui::ScrollArea::horizontal().id_salt((id, "hscroll")).show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt(id)
                .striped(true)
                .vscroll(false)
                .min_scrolled_height(0.0);
            for name in table.columns() {
                builder = builder.column(Column::initial(width_for(name)).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for name in table.columns() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(name).strong())
                                .on_hover_text(crate::glossary::describe(name).unwrap_or(name.as_str()));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.row_count(), |mut row| {
                        let r = row.index();
                        for v in &table.rows()[r] {
                            row.col(|ui| cell(ui, v));
                        }
                    });
                });
        });
    });
}

/// Two-column (metric, value) view, used for a single team's row.
pub fn draw_pairs(ui: &mut egui::Ui, id: &str, pairs: &[(String, Value)]) {
    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .vscroll(false)
        .column(Column::initial(160.0).resizable(true))
        .column(Column::initial(100.0).resizable(true))
        .body(|body| {
            body.rows(ROW_H, pairs.len(), |mut row| {
                let (name, v) = &pairs[row.index()];
                row.col(|ui| {
                    ui.label(name.as_str()).on_hover_text(crate::glossary::describe(name).unwrap_or(""));
                });
                row.col(|ui| cell(ui, v));
            });
        });
}
