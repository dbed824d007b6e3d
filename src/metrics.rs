// src/metrics.rs
//
// Derived per-record figures. Computed on demand at render/export time,
// never stored on the record.

use crate::record::ProductRecord;

/// Minimum of all present retailer prices; None when no slot is filled.
pub fn lowest_competitor_price(rec: &ProductRecord) -> Option<f64> {
    rec.retailer_prices
        .iter()
        .filter_map(|p| *p)
        .fold(None, |acc: Option<f64>, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Signed relative gap between our price and the lowest competitor price:
/// ((base - lowest) / base) * 100.
///
/// None means "not applicable": base absent, base zero (no division by
/// zero), or no competitor price observed. A competitor above our price
/// yields a negative value; callers must not clamp it.
pub fn percent_difference(base: Option<f64>, lowest: Option<f64>) -> Option<f64> {
    let base = base?;
    let lowest = lowest?;
    if base == 0.0 {
        return None;
    }
    Some(((base - lowest) / base) * 100.0)
}
