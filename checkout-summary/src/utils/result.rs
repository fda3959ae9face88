//! Unified Result Types

use super::error::SummaryError;

/// Result type for snapshot loading and screen actions
pub type AppResult<T> = Result<T, SummaryError>;
