// src/specs/fields.rs
//
// Ordered pattern table for the semantic product fields. Supplier exports
// disagree on header spelling ("product_id", "Product ID", "post_id", …);
// each field gets a list of regex alternatives tried in order, and the
// first header matching any alternative claims the field.

use once_cell::sync::Lazy;
use regex::Regex;

/// Semantic target fields, in fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Brand,
    Sku,
    Supplier,
    PurchasePrice,
    RegularPrice,
    SalePrice,
}

/// Column index per field, resolved against one header row.
#[derive(Clone, Debug, Default)]
pub struct FieldColumns {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub brand: Option<usize>,
    pub sku: Option<usize>,
    pub supplier: Option<usize>,
    pub purchase_price: Option<usize>,
    pub regular_price: Option<usize>,
    pub sale_price: Option<usize>,
}

// Alternatives per field, most specific first. `[_\s-]?` absorbs the
// spacing/punctuation variants seen across real exports.
static PATTERNS: Lazy<Vec<(Field, Vec<Regex>)>> = Lazy::new(|| {
    let rx = |p: &str| Regex::new(p).expect("field pattern");
    vec![
        (Field::Id, vec![
            rx(r"\bproduct[_\s-]?id\b"),
            rx(r"\bpost[_\s-]?id\b"),
            rx(r"^id\b"),
        ]),
        (Field::Name, vec![
            rx(r"\bpost[_\s-]?title\b"),
            rx(r"\bproduct\b"),
            rx(r"\bproduct[_\s-]?name\b"),
            rx(r"\bname\b"),
            rx(r"\btitle\b"),
        ]),
        (Field::Brand, vec![
            rx(r"\bproduct[_\s-]?brand\b"),
            rx(r"\bbrand\b"),
        ]),
        (Field::Sku, vec![
            rx(r"\bproduct[_\s-]?sku\b"),
            rx(r"\bsupplier[_\s-]?sku\b"),
            rx(r"\bsku\b"),
        ]),
        (Field::Supplier, vec![
            rx(r"\bsupplier[_\s-]?name\b"),
            rx(r"\bbrand[_\s-]?supplier\b"),
            rx(r"\bsupplier\b"),
            rx(r"\bvendor\b"),
        ]),
        (Field::PurchasePrice, vec![
            rx(r"\bpurchase[_\s-]?price\b"),
            rx(r"\bpurchase\b"),
            rx(r"\bcost\b"),
            rx(r"\bbuy\b"),
            rx(r"\bcost[_\s-]?price\b"),
        ]),
        (Field::RegularPrice, vec![
            rx(r"\bregular[_\s-]?price\b"),
            rx(r"\bprice[_\s-]?reg\b"),
            rx(r"\brrp\b"),
            rx(r"\bretail\b"),
            rx(r"\bregular\b"),
        ]),
        (Field::SalePrice, vec![
            rx(r"\bsale[_\s-]?price\b"),
            rx(r"\bprice[_\s-]?sale\b"),
            rx(r"\bsale\b"),
            rx(r"\bspecial\b"),
            rx(r"\bpromo\b"),
        ]),
    ]
});

/// Find the first header index matched by any alternative, in pattern order.
fn find_column(headers: &[String], alts: &[Regex]) -> Option<usize> {
    for rx in alts {
        if let Some(i) = headers.iter().position(|h| rx.is_match(h)) {
            return Some(i);
        }
    }
    None
}

/// Resolve all semantic fields against a normalized header row.
/// Headers must already be trimmed and lowercased (see `core::sanitize`).
pub fn match_columns(headers: &[String]) -> FieldColumns {
    let mut out = FieldColumns::default();
    for (field, alts) in PATTERNS.iter() {
        let ix = find_column(headers, alts);
        match field {
            Field::Id => out.id = ix,
            Field::Name => out.name = ix,
            Field::Brand => out.brand = ix,
            Field::Sku => out.sku = ix,
            Field::Supplier => out.supplier = ix,
            Field::PurchasePrice => out.purchase_price = ix,
            Field::RegularPrice => out.regular_price = ix,
            Field::SalePrice => out.sale_price = ix,
        }
    }
    out
}
