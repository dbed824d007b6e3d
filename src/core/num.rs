// src/core/num.rs
//
// Numeric coercion for price cells. Supplier exports write prices every
// which way: "R 1,234.56", "1 234.56", "145%", plain numbers. We strip
// everything that is not digit/dot/minus and parse what remains.

/// Coerce a raw cell into a finite price.
///
/// Returns None for empty input, for cells with no usable digits, and for
/// non-finite parse results. A literal zero stays Some(0.0) — a zero price
/// and a missing price are different facts downstream.
pub fn coerce_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Format a price for display cells ("1234.56"); empty string when absent.
pub fn price_cell(v: Option<f64>) -> String {
    match v {
        Some(n) => format!("{:.2}", n),
        None => s!(),
    }
}
