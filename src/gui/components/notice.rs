// src/gui/components/notice.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::{App, Severity};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(notice) = app.notice.clone() else { return };

    let color = match notice.severity {
        Severity::Info => Color32::from_rgb(0x64, 0xB4, 0xFF),
        Severity::Warn => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        Severity::Error => Color32::from_rgb(0xDC, 0x61, 0x49),
    };

    let mut dismiss = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(&notice.text).color(color));
        dismiss = ui.small_button("✕").clicked();
    });
    if dismiss {
        app.notice = None;
    }
    ui.separator();
}
