// src/gui/actions/copy.rs
use eframe::egui;

use crate::{gui::app::App, store};

use super::{Target, table_for};

pub fn copy(ui_ctx: &egui::Context, app: &mut App, target: Target) {
    let txt = {
        let table = table_for(app, target);
        if table.is_empty() {
            logd!("Copy: Clicked, but there's nothing to copy");
            None
        } else {
            let export = &app.state.options.export;
            logf!("Copy: {:?}, rows={}", target, table.row_count());
            Some(store::to_export_string(table, export.format.delim(), export.include_headers))
        }
    };

    match txt {
        Some(t) => {
            ui_ctx.copy_text(t);
            app.status("Copied to clipboard");
        }
        None => app.status("Nothing to copy"),
    }
}
