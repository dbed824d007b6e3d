// src/params.rs
use std::path::PathBuf;

use crate::config::options::ExportFormat;

pub const DEFAULT_REPORT_FILENAME: &str = "market_report.html";

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>,      // CSV to load (required unless list_retailers)
    pub out: Option<PathBuf>,        // output path (file, or dir to drop the default name into)
    pub format: ExportFormat,        // csv | tsv | html
    pub sample: Option<usize>,       // draw a sample of N rows; None = whole batch
    pub seed: Option<u64>,           // deterministic sampling for scripting
    pub include_headers: bool,       // include headers row in CSV/TSV output
    pub list_retailers: bool,        // list recognized retailers then exit
    pub print_stdout: bool,          // print instead of writing a file
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            out: None,
            format: ExportFormat::Html,
            sample: None,
            seed: None,
            include_headers: true,
            list_retailers: false,
            print_stdout: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
