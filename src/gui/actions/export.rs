// src/gui/actions/export.rs
use crate::{file, gui::app::App, view};

/// Write the visible table to the configured output path in the configured
/// format. Exports always reflect the prices on screen right now,
/// user edits included.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.row_ix.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let table = view::build_table(&app.records, &app.row_ix);
    let export = &app.state.options.export;

    logf!(
        "Export: Begin rows={}, format={:?}",
        table.rows.len(),
        export.format
    );

    let status_msg = match file::write_export_single(export, &app.state.gui.loaded_file, &table) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported: {}", path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
