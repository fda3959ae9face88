//! Checkout order summary
//!
//! Computes and lays out the figures of the checkout order summary:
//! subtotal, promo discount, savings, estimated taxes and total.
//!
//! # Modules
//!
//! ```text
//! checkout-summary/src/
//! ├── money/      # Decimal helpers (minor units, cent rounding)
//! ├── pricing/    # Order total calculator
//! ├── screen/     # Summary rows, collapsible sections, actions
//! ├── snapshot.rs # Snapshot loading and validation
//! ├── core/       # Configuration
//! └── utils/      # Errors, result alias, logging
//! ```
//!
//! # Example
//!
//! ```
//! use checkout_summary::compute_breakdown;
//! use rust_decimal::Decimal;
//! use shared::order::{LineItem, PromoRate};
//!
//! let items = [LineItem::new(Decimal::from(10), Decimal::ZERO, Decimal::from(8))];
//! let breakdown = compute_breakdown(&items, PromoRate::NONE);
//! assert_eq!(breakdown.total, Decimal::new(1080, 2));
//! ```

pub mod core;
pub mod money;
pub mod pricing;
pub mod screen;
pub mod snapshot;
pub mod utils;

// Re-exports
pub use crate::core::Config;
pub use pricing::compute_breakdown;
pub use screen::{LoggingDispatcher, SummaryDispatcher, SummaryScreen, SummaryView};
pub use snapshot::{load_snapshot, parse_snapshot, read_snapshot};
pub use utils::{AppResult, ErrorCode, SummaryError};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
