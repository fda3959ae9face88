//! Order pricing
//!
//! Derives the order summary figures shown at checkout.

mod breakdown_calculator;

pub use breakdown_calculator::*;
