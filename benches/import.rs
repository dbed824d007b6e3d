// benches/import.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use market_compare::csv::{parse_rows, Delim};
use market_compare::import::parse_products;

/// Synthetic supplier export: 500 rows, messy-but-typical headers.
fn build_sample(rows: usize) -> String {
    let mut text = String::with_capacity(rows * 96);
    text.push_str("Product ID,post_title,Brand,SKU,Supplier,Regular Price,Sale Price,Makro,Hi-Fi Corp,Takealot\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{id},\"Product, deluxe {id}\",BrandCo,SK-{id},Acme,R{reg}.00,R{sale}.00,{m},{h},{t}\n",
            id = i + 1,
            reg = 200 + (i % 700),
            sale = 150 + (i % 650),
            m = 180 + (i % 710),
            h = 190 + (i % 690),
            t = if i % 7 == 0 { String::new() } else { (170 + (i % 720)).to_string() },
        ));
    }
    text
}

fn bench_import(c: &mut Criterion) {
    let doc = build_sample(500);

    c.bench_function("tokenize_500_rows", |b| {
        b.iter(|| {
            let rows = parse_rows(black_box(&doc), Delim::Csv);
            black_box(rows.len())
        })
    });

    c.bench_function("normalize_500_rows", |b| {
        b.iter(|| {
            let recs = parse_products(black_box(&doc));
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_import);
criterion_main!(benches);
