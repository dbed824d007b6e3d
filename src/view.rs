// src/view.rs
//
// Projection of records + derived metrics into the fixed report table.
// The same headers/rows feed the GUI table labels, clipboard copy, CSV/TSV
// export and the printable HTML report, so every surface shows identical
// values — including competitor prices the user just edited.

use crate::metrics::{lowest_competitor_price, percent_difference};
use crate::record::ProductRecord;
use crate::specs::retailers;

/// "Not applicable" cell, shown wherever a value cannot exist.
pub const NA: &str = "-";

/// Owned table ready for display or serialization.
#[derive(Clone, Debug)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Fixed column order: identity, our prices, one column per recognized
/// retailer, then the derived columns.
pub fn headers() -> Vec<String> {
    let mut h = vec![
        s!("Product ID"),
        s!("Product"),
        s!("Brand"),
        s!("SKU"),
        s!("Supplier"),
        s!("Our Reg"),
        s!("Our Sale"),
    ];
    h.extend(retailers::LABELS.iter().map(|l| s!(*l)));
    h.push(s!("Lowest"));
    h.push(s!("% Diff (Reg)"));
    h.push(s!("% Diff (Sale)"));
    h
}

/// Rand-prefixed price ("R1234.56") or the n/a cell.
pub fn fmt_price(v: Option<f64>) -> String {
    match v {
        Some(n) => format!("R{:.2}", n),
        None => s!(NA),
    }
}

/// One-decimal signed percentage ("60.0%", "-12.5%") or the n/a cell.
pub fn fmt_pct(v: Option<f64>) -> String {
    match v {
        Some(p) => format!("{:.1}%", p),
        None => s!(NA),
    }
}

/// Build the full row for one record, derived columns included.
pub fn build_row(rec: &ProductRecord) -> Vec<String> {
    let lowest = lowest_competitor_price(rec);
    let mut row = vec![
        rec.id.clone(),
        rec.name.clone(),
        rec.brand.clone().unwrap_or_default(),
        rec.sku.clone().unwrap_or_default(),
        rec.supplier.clone().unwrap_or_default(),
        fmt_price(rec.regular_price),
        fmt_price(rec.sale_price),
    ];
    for slot in 0..retailers::COUNT {
        // Retailer cells stay plain numbers — they mirror the editable inputs.
        row.push(match rec.retailer_price(slot) {
            Some(n) => format!("{:.2}", n),
            None => s!(),
        });
    }
    row.push(fmt_price(lowest));
    row.push(fmt_pct(percent_difference(rec.regular_price, lowest)));
    row.push(fmt_pct(percent_difference(rec.sale_price, lowest)));
    row
}

/// Materialize the visible table: `row_ix` selects records in display order.
pub fn build_table(records: &[ProductRecord], row_ix: &[usize]) -> ReportTable {
    let rows = row_ix
        .iter()
        .filter_map(|&ix| records.get(ix).map(build_row))
        .collect();
    ReportTable { headers: headers(), rows }
}
