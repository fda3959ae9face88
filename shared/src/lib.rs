//! Shared types for the checkout summary
//!
//! Models exchanged between the app store and the order summary:
//! line items, promo rate, the derived breakdown, the snapshot the summary
//! renders and the actions it dispatches.

pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{Breakdown, LineItem, PromoRate, SummaryAction, SummarySnapshot};
