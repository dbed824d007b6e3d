// tests/import.rs
//
// Normalizer behavior: header matching, blank-row policy, numeric
// coercion, retailer canonicalization, and tokenizer round-trips.
//
use market_compare::csv::{parse_rows, write_row, Delim};
use market_compare::import::{parse_products, UNNAMED};
use market_compare::specs::retailers;

fn slot(label: &str) -> usize {
    retailers::LABELS.iter().position(|l| *l == label).unwrap()
}

#[test]
fn record_count_matches_non_blank_rows() {
    let csv = "\
Product ID,post_title,Regular Price\n\
101,Kettle,299\n\
,,\n\
102,Toaster,399\n\
\n\
103,Blender,499\n";
    let recs = parse_products(csv);
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].id, "101");
    assert_eq!(recs[2].name, "Blender");
}

#[test]
fn header_variants_resolve_to_semantic_fields() {
    let csv = "\
product_id,Post Title,Product Brand,Product SKU,Vendor,Cost Price,RRP,Promo\n\
A1,Fridge,CoolCo,SK-9,Acme Wholesale,1500,2999,2499\n";
    let recs = parse_products(csv);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.id, "A1");
    assert_eq!(r.name, "Fridge");
    assert_eq!(r.brand.as_deref(), Some("CoolCo"));
    assert_eq!(r.sku.as_deref(), Some("SK-9"));
    assert_eq!(r.supplier.as_deref(), Some("Acme Wholesale"));
    assert_eq!(r.purchase_price, Some(1500.0));
    assert_eq!(r.regular_price, Some(2999.0));
    assert_eq!(r.sale_price, Some(2499.0));
}

#[test]
fn specific_alternatives_beat_generic_ones() {
    // "Supplier SKU" must land on sku, leaving "Supplier Name" for supplier.
    let csv = "Supplier SKU,Supplier Name,post_title\nSK-1,Acme,Kettle\n";
    let recs = parse_products(csv);
    let r = &recs[0];
    assert_eq!(r.sku.as_deref(), Some("SK-1"));
    assert_eq!(r.supplier.as_deref(), Some("Acme"));
}

#[test]
fn id_and_name_fall_back_when_columns_missing() {
    let csv = "Regular Price\n100\n200\n";
    let recs = parse_products(csv);
    assert_eq!(recs.len(), 2);
    // 1-based positional ids
    assert_eq!(recs[0].id, "1");
    assert_eq!(recs[1].id, "2");
    assert_eq!(recs[0].name, UNNAMED);
}

#[test]
fn retailer_headers_canonicalize_and_first_column_wins() {
    // Both spellings are the same retailer; the leftmost column is kept.
    let csv = "\
Name,Hi-Fi Corp,HIFI CORP,Takealot,take-alot\n\
Kettle,100,200,80,90\n";
    let recs = parse_products(csv);
    let r = &recs[0];
    assert_eq!(r.retailer_price(slot("HiFi Corp")), Some(100.0));
    assert_eq!(r.retailer_price(slot("Takealot")), Some(80.0));
    // unmatched retailers stay absent
    assert_eq!(r.retailer_price(slot("Makro")), None);
}

#[test]
fn unrecognized_columns_are_ignored() {
    let csv = "Name,Random Shop,Makro\nKettle,55,60\n";
    let recs = parse_products(csv);
    let r = &recs[0];
    assert_eq!(r.retailer_price(slot("Makro")), Some(60.0));
    // "Random Shop" contributed nothing anywhere
    assert_eq!(
        r.retailer_prices.iter().filter(|p| p.is_some()).count(),
        1
    );
}

#[test]
fn numeric_coercion_strips_currency_and_keeps_zero() {
    let csv = "\
Name,Regular Price,Sale Price,Makro,Game\n\
Kettle,\"R 1,234.56\",145%,0,n/a\n";
    let recs = parse_products(csv);
    let r = &recs[0];
    assert_eq!(r.regular_price, Some(1234.56));
    assert_eq!(r.sale_price, Some(145.0));
    // zero is a real price, not an absence
    assert_eq!(r.retailer_price(slot("Makro")), Some(0.0));
    // no digits at all → absent
    assert_eq!(r.retailer_price(slot("Game")), None);
}

#[test]
fn empty_and_header_only_files_yield_no_records() {
    assert!(parse_products("").is_empty());
    assert!(parse_products("Product ID,Name\n").is_empty());
}

#[test]
fn unterminated_quote_degrades_without_panicking() {
    let csv = "Name,Makro\nKettle,\"55\nToaster,60\n";
    // The open quote swallows the rest of the text into one cell; the
    // parse still completes and yields the first record.
    let recs = parse_products(csv);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "Kettle");
}

#[test]
fn quoted_fields_round_trip_through_writer_and_parser() {
    let row = vec![
        "plain".to_string(),
        "with,comma".to_string(),
        "with \"quotes\"".to_string(),
        "multi\nline".to_string(),
        String::new(),
    ];
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &row, Delim::Csv).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let parsed = parse_rows(&text, Delim::Csv);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0], row);
}

#[test]
fn tsv_parsing_honors_tab_separator() {
    let rows = parse_rows("a\tb\tc\n1\t2\t3\n", Delim::Tsv);
    assert_eq!(rows, vec![
        vec!["a".to_string(), "b".into(), "c".into()],
        vec!["1".to_string(), "2".into(), "3".into()],
    ]);
}
