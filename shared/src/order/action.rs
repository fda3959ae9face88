//! Summary actions - requests the summary screen hands back to the store

use super::LineItem;
use serde::{Deserialize, Serialize};

/// Action dispatched from the order summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryAction {
    /// User confirmed a promo code
    SubmitPromo { code: String },
    /// User edited an item
    UpdateItem { item: LineItem },
}

impl SummaryAction {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitPromo { .. } => "SUBMIT_PROMO",
            Self::UpdateItem { .. } => "UPDATE_ITEM",
        }
    }
}
