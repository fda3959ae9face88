//! Error types for the order summary
//!
//! The calculator itself cannot fail. Errors only arise at the edges:
//! reading a snapshot, rejecting invalid input, submitting an empty promo.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidAmount,
    InvalidTaxRate,
    InvalidPromoRate,
    EmptyPromoCode,
    MalformedSnapshot,
    IoError,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    /// Snapshot file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON or has the wrong shape
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Input rejected before it reaches the calculator
    #[error("{1}")]
    Invalid(ErrorCode, String),
}

impl SummaryError {
    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Invalid(code, message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::MalformedSnapshot,
            Self::Invalid(code, _) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = SummaryError::invalid(ErrorCode::InvalidAmount, "price must be non-negative");
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
        assert_eq!(err.to_string(), "price must be non-negative");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(SummaryError::from(json_err).code(), ErrorCode::MalformedSnapshot);
    }

    #[test]
    fn test_code_wire_format() {
        let json = serde_json::to_string(&ErrorCode::EmptyPromoCode).unwrap();
        assert_eq!(json, r#""EMPTY_PROMO_CODE""#);

        let json = serde_json::to_string(&ErrorCode::InvalidPromoRate).unwrap();
        assert_eq!(json, r#""INVALID_PROMO_RATE""#);
    }
}
