//! Expandable sections: item details and promo entry

use serde::Serialize;
use shared::order::{Breakdown, LineItem, PromoRate};

use super::rows::{format_amount, format_deduction};

/// Caption + icon of a section toggle
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ToggleButton {
    pub caption: &'static str,
    pub icon: &'static str,
    pub expanded: bool,
}

impl ToggleButton {
    pub(crate) fn details(expanded: bool) -> Self {
        Self {
            caption: if expanded {
                "Hide item details"
            } else {
                "See item details"
            },
            icon: icon(expanded),
            expanded,
        }
    }

    pub(crate) fn promo(expanded: bool) -> Self {
        Self {
            caption: if expanded {
                "Hide promo code"
            } else {
                "Apply promo code"
            },
            icon: icon(expanded),
            expanded,
        }
    }
}

fn icon(expanded: bool) -> &'static str {
    if expanded { "  -" } else { "  +" }
}

/// One item line of the details section
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemDetailLine {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

/// Itemized details with the order-level deductions
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemDetails {
    pub lines: Vec<ItemDetailLine>,
    pub savings: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

impl ItemDetails {
    pub fn new(items: &[LineItem], breakdown: &Breakdown, symbol: &str) -> Self {
        let lines = items
            .iter()
            .map(|item| ItemDetailLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: format_amount(symbol, item.price),
                savings: (!item.savings.is_zero())
                    .then(|| format_deduction(symbol, item.savings)),
            })
            .collect();

        Self {
            lines,
            savings: format_deduction(symbol, breakdown.savings),
            discount: breakdown
                .has_discount()
                .then(|| format_deduction(symbol, breakdown.discount)),
        }
    }
}

/// Promo code entry section
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromoEntry {
    /// Currently applied promo, e.g. "10%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<String>,
}

impl PromoEntry {
    pub fn new(promo: PromoRate) -> Self {
        Self {
            applied: promo.is_active().then(|| promo.to_string()),
        }
    }
}
