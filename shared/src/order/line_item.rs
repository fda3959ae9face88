//! Line item - one entry of a checkout order as supplied by the store

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line item snapshot
///
/// Amounts are in major currency units (e.g. dollars). The calculator does
/// not validate them; see `checkout_summary::snapshot` for the loading-side
/// checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LineItem {
    // === Identity ===
    /// Item ID, used to target `UpdateItem` actions
    #[serde(default)]
    pub id: String,
    /// Display name (item details section)
    #[serde(default)]
    pub name: String,

    // === Amounts ===
    /// Item price
    pub price: Decimal,
    /// Discount already baked into this item
    #[serde(default)]
    pub savings: Decimal,
    /// Tax rate in percent (8 = 8%)
    #[serde(default)]
    pub tax: Decimal,

    // === Display ===
    /// Delivery zipcode, annotates the tax line
    #[serde(default)]
    pub zipcode: String,
}

impl LineItem {
    /// Create an item with the amounts that matter for pricing
    pub fn new(price: Decimal, savings: Decimal, tax: Decimal) -> Self {
        Self {
            price,
            savings,
            tax,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = zipcode.into();
        self
    }
}
