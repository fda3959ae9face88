//! Utilities - error types, result alias and logging

pub mod error;
pub mod logger;
pub mod result;

pub use error::{ErrorCode, SummaryError};
pub use result::AppResult;
