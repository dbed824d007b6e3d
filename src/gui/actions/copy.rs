// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::Delim, gui::app::App, view};

/// Copy the visible table to the clipboard. Delimited formats keep their
/// separator; the HTML report format falls back to TSV, which pastes
/// cleanly into spreadsheets.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let table = view::build_table(&app.records, &app.row_ix);
    let export = &app.state.options.export;
    let delim = export.format.delim().unwrap_or(Delim::Tsv);

    logf!("Copy: rows={}, delim={:?}", table.rows.len(), delim);

    let txt = crate::csv::to_export_string(
        &table.headers,
        &table.rows,
        export.include_headers,
        delim,
    );
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
