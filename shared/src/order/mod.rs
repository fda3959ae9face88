//! Order summary models
//!
//! - Line items and promo rate: inputs supplied by the store
//! - Breakdown: figures derived from them on every render
//! - Snapshot: the `{ items, promo }` slice the summary reads
//! - Actions: what the summary hands back to the store

pub mod action;
pub mod breakdown;
pub mod line_item;
pub mod promo;
pub mod snapshot;

// Re-exports
pub use action::SummaryAction;
pub use breakdown::Breakdown;
pub use line_item::LineItem;
pub use promo::PromoRate;
pub use snapshot::SummarySnapshot;
