//! Order summary screen model
//!
//! Turns a `{ items, promo }` snapshot into what the checkout summary shows:
//! the figure rows, two collapsible sections (item details, promo entry)
//! and the actions the user can raise. Layout and styling are left to the
//! rendering layer.

mod details;
mod dispatcher;
mod rows;
mod text;

pub use details::{ItemDetailLine, ItemDetails, PromoEntry, ToggleButton};
pub use dispatcher::{LoggingDispatcher, SummaryDispatcher};
pub use rows::{RowKind, SummaryRow, format_amount, format_deduction, summary_rows};
pub use text::render_text;

use serde::Serialize;
use shared::order::{Breakdown, LineItem, SummaryAction, SummarySnapshot};

use crate::pricing::compute_breakdown;
use crate::utils::{AppResult, ErrorCode, SummaryError};

/// Everything the summary displays for one snapshot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryView {
    pub breakdown: Breakdown,
    pub rows: Vec<SummaryRow>,
    pub details_button: ToggleButton,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ItemDetails>,
    pub promo_button: ToggleButton,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_entry: Option<PromoEntry>,
}

/// Order summary screen
///
/// Owns only the two section toggles; the snapshot is passed in on every
/// render so the figures always reflect the caller's latest state.
pub struct SummaryScreen<D> {
    dispatcher: D,
    currency_symbol: String,
    show_details: bool,
    show_promo: bool,
}

impl<D: SummaryDispatcher> SummaryScreen<D> {
    /// Create a screen with both sections collapsed
    pub fn new(dispatcher: D, currency_symbol: impl Into<String>) -> Self {
        Self {
            dispatcher,
            currency_symbol: currency_symbol.into(),
            show_details: false,
            show_promo: false,
        }
    }

    pub fn is_details_open(&self) -> bool {
        self.show_details
    }

    pub fn is_promo_open(&self) -> bool {
        self.show_promo
    }

    /// Flip the item details section, returning the new state
    pub fn toggle_details(&mut self) -> bool {
        self.show_details = !self.show_details;
        self.show_details
    }

    /// Flip the promo entry section, returning the new state
    pub fn toggle_promo(&mut self) -> bool {
        self.show_promo = !self.show_promo;
        self.show_promo
    }

    /// Build the view for a snapshot
    pub fn render(&self, snapshot: &SummarySnapshot) -> SummaryView {
        let promo = snapshot.promo_rate();
        let breakdown = compute_breakdown(&snapshot.items, promo);
        let symbol = self.currency_symbol.as_str();

        SummaryView {
            breakdown,
            rows: summary_rows(&breakdown, snapshot.first_item(), symbol),
            details_button: ToggleButton::details(self.show_details),
            details: self
                .show_details
                .then(|| ItemDetails::new(&snapshot.items, &breakdown, symbol)),
            promo_button: ToggleButton::promo(self.show_promo),
            promo_entry: self.show_promo.then(|| PromoEntry::new(promo)),
        }
    }

    /// Submit a promo code typed by the user
    ///
    /// The code is trimmed; a blank code is rejected and nothing is dispatched.
    pub fn submit_promo(&self, code: &str) -> AppResult<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(SummaryError::invalid(
                ErrorCode::EmptyPromoCode,
                "promo code must not be empty",
            ));
        }

        tracing::debug!(code, "Submitting promo code");
        self.dispatcher.dispatch(SummaryAction::SubmitPromo {
            code: code.to_string(),
        });
        Ok(())
    }

    /// Hand an edited item back to the store
    pub fn update_item(&self, item: LineItem) {
        tracing::debug!(item_id = %item.id, "Updating item");
        self.dispatcher.dispatch(SummaryAction::UpdateItem { item });
    }
}
