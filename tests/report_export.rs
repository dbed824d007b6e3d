// tests/report_export.rs
//
// End-to-end: parse → edit a competitor price → build the visible table →
// serialize. Exports must reproduce what is on screen, edits included.
//
use std::fs;
use std::path::PathBuf;

use market_compare::config::options::{ExportFormat, ExportOptions};
use market_compare::csv::{to_export_string, Delim};
use market_compare::file::write_export_single;
use market_compare::import::parse_products;
use market_compare::report::build_html;
use market_compare::specs::retailers;
use market_compare::view::build_table;

const INPUT: &str = "\
Product ID,post_title,Brand,SKU,Supplier,Regular Price,Sale Price,Makro,Takealot\n\
101,Kettle,CoolCo,K-1,Acme,R299,R249,279,\n\
102,Toaster,CoolCo,T-2,Acme,R399,,389,359\n\
103,Blender,MixCo,B-3,Bulk,R499,R449,,\n";

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(name);
    p
}

#[test]
fn table_has_fixed_columns_and_derived_values() {
    let records = parse_products(INPUT);
    assert_eq!(records.len(), 3);

    let row_ix: Vec<usize> = (0..records.len()).collect();
    let table = build_table(&records, &row_ix);

    assert_eq!(table.headers.first().map(String::as_str), Some("Product ID"));
    assert_eq!(table.headers.last().map(String::as_str), Some("% Diff (Sale)"));
    assert_eq!(table.headers.len(), 7 + retailers::COUNT + 3);

    // Kettle: lowest = 279 vs reg 299
    let kettle = &table.rows[0];
    assert_eq!(kettle[0], "101");
    assert_eq!(kettle[5], "R299.00");
    assert!(kettle.contains(&"R279.00".to_string())); // Lowest column
    // ((299-279)/299)*100 = 6.7%
    assert!(kettle.contains(&"6.7%".to_string()));

    // Blender has no competitor prices → n/a cells
    let blender = &table.rows[2];
    assert!(blender.contains(&"-".to_string()));
}

#[test]
fn edits_flow_into_exports() {
    let mut records = parse_products(INPUT);
    let makro = retailers::LABELS.iter().position(|l| *l == "Makro").unwrap();

    // user types a Makro price for the Blender row
    records[2].set_retailer_price(makro, Some(444.0));

    let row_ix: Vec<usize> = (0..records.len()).collect();
    let table = build_table(&records, &row_ix);

    let html = build_html("prices.csv", &table);
    assert!(html.contains("444.00"));
    assert!(html.contains("prices.csv"));
    assert!(html.contains("<th>Lowest</th>"));

    // the derived column reflects the edit: ((499-444)/499)*100 = 11.0%
    assert!(html.contains("11.0%"));
}

#[test]
fn delimited_export_honors_header_toggle() {
    let records = parse_products(INPUT);
    let row_ix: Vec<usize> = (0..records.len()).collect();
    let table = build_table(&records, &row_ix);

    let with = to_export_string(&table.headers, &table.rows, true, Delim::Csv);
    assert!(with.starts_with("Product ID,"));

    let without = to_export_string(&table.headers, &table.rows, false, Delim::Csv);
    assert!(!without.starts_with("Product ID,"));
    assert_eq!(without.lines().count(), 3);
}

#[test]
fn write_export_single_creates_the_file() {
    let records = parse_products(INPUT);
    let row_ix: Vec<usize> = (0..records.len()).collect();
    let table = build_table(&records, &row_ix);

    let dir = tmp("mc_export_test");
    let _ = fs::remove_dir_all(&dir);

    let mut export = ExportOptions::default();
    export.format = ExportFormat::Html;
    export.set_path(&dir.join("weekly.html").to_string_lossy());

    let path = write_export_single(&export, "prices.csv", &table).unwrap();
    assert!(path.to_string_lossy().ends_with("weekly.html"));

    let doc = fs::read_to_string(&path).unwrap();
    assert!(doc.contains("Market Comparison"));
    assert!(doc.contains("Blender"));

    let _ = fs::remove_dir_all(&dir);
}
