// src/specs/retailers.rs
//
// The fixed recognized-retailer set. Columns are matched against these
// patterns in table order; records key retailer prices by the canonical
// label, never by the raw header text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical retailer labels, in fixed display/column order.
pub const LABELS: [&str; 6] = [
    "Makro",
    "HiFi Corp",
    "OK Furniture",
    "Game",
    "Incredible Connection",
    "Takealot",
];

pub const COUNT: usize = LABELS.len();

// Spelling-tolerant patterns, one per label, same order as LABELS.
// "hi-fi corp", "hifi corp" and "HiFi Corp" all normalize to slot 1;
// "take-alot" and "takealot" to slot 5.
static PATTERNS: Lazy<[Regex; COUNT]> = Lazy::new(|| {
    let rx = |p: &str| Regex::new(p).expect("retailer pattern");
    [
        rx(r"\bmakro\b"),
        rx(r"\bhi[-\s]?fi\b.*\bcorp\b"),
        rx(r"\bok\b.*\bfurniture\b"),
        rx(r"\bgame\b"),
        rx(r"\bincredible\b"),
        rx(r"\btake[-\s]?alot\b"),
    ]
});

/// Slot index of the first retailer pattern matching a normalized header.
pub fn match_retailer(header: &str) -> Option<usize> {
    PATTERNS.iter().position(|rx| rx.is_match(header))
}

/// Scan a normalized header row for retailer columns.
///
/// Returns (retailer slot, column index) pairs. A header matches at most one
/// retailer (first pattern wins); duplicate headers for the same retailer
/// keep the leftmost column and ignore the rest.
pub fn detect_columns(headers: &[String]) -> Vec<(usize, usize)> {
    let mut claimed = [false; COUNT];
    let mut out = Vec::new();
    for (col, h) in headers.iter().enumerate() {
        if let Some(slot) = match_retailer(h) {
            if !claimed[slot] {
                claimed[slot] = true;
                out.push((slot, col));
            }
        }
    }
    out
}
