// src/import.rs
//
// Raw CSV text → ordered batch of ProductRecord. Best-effort by design:
// malformed input degrades to fewer records, never to an error the UI has
// to handle. An empty or header-only file yields an empty batch.

use crate::core::num::coerce_price;
use crate::core::sanitize::{normalize_header, normalize_ws};
use crate::csv::{self, Delim};
use crate::record::ProductRecord;
use crate::specs::{fields, retailers};

/// Placeholder when no name column matched or the cell is blank.
pub const UNNAMED: &str = "(Unnamed)";

/// Parse one uploaded file into records.
///
/// The first row is the header row; every following row that has at least
/// one non-blank cell becomes exactly one record.
pub fn parse_products(text: &str) -> Vec<ProductRecord> {
    let mut rows = csv::parse_rows(text, Delim::Csv);
    if rows.is_empty() {
        return Vec::new();
    }

    let headers: Vec<String> = rows.remove(0).iter().map(|h| normalize_header(h)).collect();
    let cols = fields::match_columns(&headers);
    let retailer_cols = retailers::detect_columns(&headers);

    logd!(
        "Import: {} headers, id={:?} name={:?} reg={:?} sale={:?}, {} retailer column(s)",
        headers.len(), cols.id, cols.name, cols.regular_price, cols.sale_price,
        retailer_cols.len()
    );

    let mut out = Vec::with_capacity(rows.len());
    for row in &rows {
        // Fully blank rows are dropped, not recorded as empty products.
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let position = out.len() + 1; // 1-based, matches what a user sees in the file
        let id = match text_cell(row, cols.id) {
            Some(v) => v,
            None => position.to_string(),
        };
        let name = text_cell(row, cols.name).unwrap_or_else(|| s!(UNNAMED));

        let mut rec = ProductRecord::new(id, name);
        rec.brand = text_cell(row, cols.brand);
        rec.sku = text_cell(row, cols.sku);
        rec.supplier = text_cell(row, cols.supplier);
        rec.purchase_price = price_cell(row, cols.purchase_price);
        rec.regular_price = price_cell(row, cols.regular_price);
        rec.sale_price = price_cell(row, cols.sale_price);
        for &(slot, col) in &retailer_cols {
            rec.set_retailer_price(slot, price_cell(row, Some(col)));
        }
        out.push(rec);
    }

    logf!("Import: {} record(s) from {} data row(s)", out.len(), rows.len());
    out
}

fn text_cell(row: &[String], col: Option<usize>) -> Option<String> {
    let cell = normalize_ws(row.get(col?)?);
    if cell.is_empty() { None } else { Some(cell) }
}

fn price_cell(row: &[String], col: Option<usize>) -> Option<f64> {
    coerce_price(row.get(col?)?)
}
