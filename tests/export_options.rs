// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use market_compare::config::options::{ExportFormat, ExportOptions};

#[test]
fn default_path_ext_follows_format() {
    let mut opts = ExportOptions::default();

    opts.format = ExportFormat::Html;
    assert!(opts.out_path().to_string_lossy().ends_with(".html"));

    // Switch format; extension should reflect it, stem unchanged
    opts.format = ExportFormat::Csv;
    let p = opts.out_path();
    assert!(p.to_string_lossy().ends_with("market_report.csv"));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with(".tsv"));
}

#[test]
fn set_path_splits_dir_and_stem_and_ignores_pasted_extension() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;

    // Simulate the textbox holding a custom extension the user typed
    opts.set_path("out/custom/report.data");

    // Format controls the extension, not the pasted text
    let p = opts.out_path();
    let s = p.to_string_lossy().replace('\\', "/");
    assert_eq!(s, "out/custom/report.csv");
}

#[test]
fn file_stem_follows_loaded_file() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Html;
    opts.set_file_stem("supplier_week32");
    assert!(opts
        .out_path()
        .to_string_lossy()
        .ends_with("supplier_week32.html"));
}
