//! Breakdown - derived monetary figures shown on the order summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order summary figures
///
/// Every field is already rounded to cents. The value is derived on each
/// render and never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Breakdown {
    /// Sum of item prices
    pub subtotal: Decimal,
    /// Promo discount on the subtotal
    pub discount: Decimal,
    /// Sum of per-item savings
    pub savings: Decimal,
    /// Estimated taxes & fees
    pub taxes: Decimal,
    /// subtotal - savings - discount + taxes
    pub total: Decimal,
}

impl Breakdown {
    /// Whether a promo discount is applied
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    pub fn has_savings(&self) -> bool {
        !self.savings.is_zero()
    }
}
