// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv;
use crate::report;
use crate::view::ReportTable;

/// Serialize the visible table in the selected export format.
/// `source` is the loaded file name, shown in the report header.
pub fn export_contents(export: &ExportOptions, source: &str, table: &ReportTable) -> String {
    match export.format.delim() {
        Some(delim) => {
            csv::to_export_string(&table.headers, &table.rows, export.include_headers, delim)
        }
        None => report::build_html(source, table),
    }
}

/// Write a single export file based on ExportOptions (path, headers policy,
/// format). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    source: &str,
    table: &ReportTable,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_contents(export, source, table))?;
    Ok(path)
}

/// Resolve a user-supplied `-o` value: a directory (existing or hinted by a
/// trailing separator) gets the default filename appended.
pub fn resolve_single_out_path(
    user_o: &str,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
