//! Order Total Calculator
//!
//! Derive the order summary figures from the line items and promo rate:
//! - Subtotal and savings summed in minor units
//! - Promo discount as a percentage of the rounded subtotal
//! - Taxes from the first item's rate (one jurisdiction per order)
//!
//! Pure: no I/O, no state, inputs untouched.

use shared::order::{Breakdown, LineItem, PromoRate};

use crate::money::{self, percent_of, sum_money};

/// Compute the order breakdown
///
/// # Arguments
/// * `items` - Line items, possibly empty
/// * `promo` - Order-level promo rate (`PromoRate::NONE` when absent)
///
/// # Calculation Steps
/// 1. subtotal = Σ price, in cents, rounded
/// 2. discount = subtotal × promo%, 0 without promo
/// 3. savings = Σ savings, in cents, rounded
/// 4. taxes = subtotal × first item's tax%, 0 without items
/// 5. total = subtotal - savings - discount + taxes
///
/// Each term is cent-exact, so `total` needs no further rounding. Figures
/// beyond the `Decimal` range saturate rather than panic.
pub fn compute_breakdown(items: &[LineItem], promo: PromoRate) -> Breakdown {
    let subtotal = sum_money(items.iter().map(|item| item.price));

    let discount = if promo.is_active() {
        percent_of(subtotal, promo.percent())
    } else {
        money::ZERO
    };

    let savings = sum_money(items.iter().map(|item| item.savings));

    let taxes = items
        .first()
        .map_or(money::ZERO, |first| percent_of(subtotal, first.tax));

    let total = subtotal
        .saturating_sub(savings)
        .saturating_sub(discount)
        .saturating_add(taxes);

    tracing::trace!(
        items = items.len(),
        promo = %promo.percent(),
        %subtotal,
        %discount,
        %savings,
        %taxes,
        %total,
        "Computed order breakdown"
    );

    Breakdown {
        subtotal,
        discount,
        savings,
        taxes,
        total,
    }
}

// ==================== Tests ====================
