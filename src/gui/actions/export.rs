// src/gui/actions/export.rs
use crate::{gui::app::{App, Severity}, store};

use super::{Target, table_for};

pub fn export(app: &mut App, target: Target) {
    // out dir text → options before any table borrow
    app.state.options.export.set_dir(&app.out_dir_text);

    let result = {
        let table = table_for(app, target);
        if table.is_empty() {
            logd!("Export: Clicked, but there's nothing to export");
            None
        } else {
            logf!("Export: Begin {:?}, rows={}, cols={}", target, table.row_count(), table.columns().len());
            Some(store::export_table(&app.state.options.export, target.file_stem(), table))
        }
    };

    // mutate app only after the table borrow is gone
    match result {
        None => app.status("Nothing to export"),
        Some(Ok(path)) => app.status(format!("Exported {}", path.display())),
        Some(Err(e)) => {
            loge!("Export: Error: {}", e);
            app.notify(Severity::Error, format!("Export error: {e}"));
        }
    }
}
