//! Summary rows - the figures block of the order summary

use rust_decimal::Decimal;
use serde::Serialize;
use shared::order::{Breakdown, LineItem};

use crate::money::round_money;

/// Which figure a row shows
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowKind {
    Subtotal,
    PromoApplied,
    Savings,
    Taxes,
    Total,
}

impl RowKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subtotal => "Subtotal",
            Self::PromoApplied => "PROMO APPLIED",
            Self::Savings => "Savings",
            Self::Taxes => "Est. taxes & fees",
            Self::Total => "Est. total",
        }
    }
}

/// One label/amount line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryRow {
    pub kind: RowKind,
    pub label: &'static str,
    pub value: String,
    /// Secondary line under the row, e.g. "(Based on 94107)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SummaryRow {
    fn new(kind: RowKind, value: String) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
            note: None,
        }
    }
}

/// Format an amount with two fractional digits: `$10.00`, `-$1.50`
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{:.2}", rounded.abs())
}

/// Format an amount taken off the order: `-$3.00`
pub fn format_deduction(symbol: &str, amount: Decimal) -> String {
    format_amount(symbol, -amount)
}

/// Build the figure rows in display order
///
/// The promo and savings rows only appear when non-zero. The tax row is
/// annotated with the first item's zipcode.
pub fn summary_rows(
    breakdown: &Breakdown,
    first_item: Option<&LineItem>,
    symbol: &str,
) -> Vec<SummaryRow> {
    let mut rows = Vec::with_capacity(5);

    rows.push(SummaryRow::new(
        RowKind::Subtotal,
        format_amount(symbol, breakdown.subtotal),
    ));

    if breakdown.has_discount() {
        rows.push(SummaryRow::new(
            RowKind::PromoApplied,
            format_deduction(symbol, breakdown.discount),
        ));
    }

    if breakdown.has_savings() {
        rows.push(SummaryRow::new(
            RowKind::Savings,
            format_deduction(symbol, breakdown.savings),
        ));
    }

    let mut taxes = SummaryRow::new(RowKind::Taxes, format_amount(symbol, breakdown.taxes));
    taxes.note = first_item.map(|item| format!("(Based on {})", item.zipcode));
    rows.push(taxes);

    rows.push(SummaryRow::new(
        RowKind::Total,
        format_amount(symbol, breakdown.total),
    ));

    rows
}
