// src/record.rs
//
// Canonical normalized product data. One ProductRecord per non-blank CSV
// row; one batch per loaded file, replaced wholesale on the next load.
// The GUI mutates records only through set_retailer_price.

use crate::specs::retailers;

/// One normalized product row.
///
/// Numeric fields are Some(finite) or None — NaN/Infinity never gets this
/// far (see `core::num`). Zero is a real price, not an absence.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRecord {
    /// From the id column, or the 1-based row position when none matched.
    /// Unique within a batch, not across repeated imports.
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier: Option<String>,
    pub purchase_price: Option<f64>,
    pub regular_price: Option<f64>,
    pub sale_price: Option<f64>,
    /// One slot per canonical retailer, in `specs::retailers::LABELS` order.
    pub retailer_prices: Vec<Option<f64>>,
}

impl ProductRecord {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            brand: None,
            sku: None,
            supplier: None,
            purchase_price: None,
            regular_price: None,
            sale_price: None,
            retailer_prices: vec![None; retailers::COUNT],
        }
    }

    pub fn retailer_price(&self, slot: usize) -> Option<f64> {
        self.retailer_prices.get(slot).copied().flatten()
    }

    /// In-place competitor price edit. None clears the slot.
    pub fn set_retailer_price(&mut self, slot: usize, value: Option<f64>) {
        if let Some(p) = self.retailer_prices.get_mut(slot) {
            *p = value;
        }
    }
}
