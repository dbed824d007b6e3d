// src/gui/actions/load.rs
use std::fs;
use std::path::Path;

use crate::core::sanitize::sanitize_file_stem;
use crate::{gui::app::App, import};

/// Read the CSV named in the path field and replace the working batch.
/// A read failure leaves the prior batch untouched.
pub fn load(app: &mut App) {
    let path_text = app.csv_path_text.trim().to_string();
    if path_text.is_empty() {
        app.status("Enter a CSV file path first");
        logd!("Load: Clicked with empty path field");
        return;
    }

    let text = match fs::read_to_string(&path_text) {
        Ok(t) => t,
        Err(e) => {
            loge!("Load: Read failed {}: {}", path_text, e);
            app.status(format!("Could not read file: {e}"));
            return;
        }
    };

    let records = import::parse_products(&text);
    let file_name = Path::new(&path_text)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_text.clone());

    logf!("Load: {} → {} record(s)", file_name, records.len());

    // Name the export after the input file, unless the user typed their own.
    let stem = Path::new(&file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    app.state.options.export.set_file_stem(&sanitize_file_stem(&stem));
    if !app.out_path_dirty {
        app.out_path_text = app
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into_owned();
    }

    if records.is_empty() {
        // Still replace: an empty file legitimately empties the table.
        app.set_batch(records, &file_name);
        app.status("No products found — check the header row");
        return;
    }

    app.set_batch(records, &file_name);
    app.status(app.sample_message());
}
