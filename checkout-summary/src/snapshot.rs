//! Snapshot loading and validation
//!
//! The calculator trusts its inputs; this is where they get checked.

use rust_decimal::Decimal;
use shared::order::{LineItem, SummarySnapshot};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::Config;
use crate::money;
use crate::utils::{AppResult, ErrorCode, SummaryError};

/// Validate a line item before it reaches the calculator
pub fn validate_line_item(item: &LineItem, max_price: Decimal) -> AppResult<()> {
    validate_amount(item.price, "price", &item.id, max_price)?;
    validate_amount(item.savings, "savings", &item.id, max_price)?;

    if item.tax < Decimal::ZERO || item.tax > Decimal::ONE_HUNDRED {
        return Err(SummaryError::invalid(
            ErrorCode::InvalidTaxRate,
            format!(
                "tax rate must be between 0 and 100, got {} (item '{}')",
                item.tax, item.id
            ),
        ));
    }

    Ok(())
}

fn validate_amount(value: Decimal, field: &str, item_id: &str, max: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(SummaryError::invalid(
            ErrorCode::InvalidAmount,
            format!("{field} must be non-negative, got {value} (item '{item_id}')"),
        ));
    }
    if value > max {
        return Err(SummaryError::invalid(
            ErrorCode::InvalidAmount,
            format!("{field} exceeds maximum allowed ({max}), got {value} (item '{item_id}')"),
        ));
    }
    Ok(())
}

/// Validate every item of a snapshot
///
/// An out-of-range promo rate is accepted and only logged, unless the
/// discount it yields on this order's subtotal does not fit a `Decimal`.
pub fn validate_snapshot(snapshot: &SummarySnapshot, max_price: Decimal) -> AppResult<()> {
    for item in &snapshot.items {
        validate_line_item(item, max_price)?;
    }

    if let Some(promo) = snapshot.promo {
        let subtotal = money::sum_money(snapshot.items.iter().map(|item| item.price));
        if money::checked_percent_of(subtotal, promo.percent()).is_none() {
            return Err(SummaryError::invalid(
                ErrorCode::InvalidPromoRate,
                format!("promo rate {promo} is too large to apply to subtotal {subtotal}"),
            ));
        }

        if !promo.is_in_range() {
            tracing::warn!(promo = %promo, "Promo rate outside 0-100%, applying as given");
        }
    }

    Ok(())
}

/// Parse and validate a snapshot from JSON text
pub fn parse_snapshot(json: &str, config: &Config) -> AppResult<SummarySnapshot> {
    let snapshot: SummarySnapshot = serde_json::from_str(json)?;
    validate_snapshot(&snapshot, config.max_item_price)?;
    Ok(snapshot)
}

/// Read and validate a snapshot from any reader (e.g. stdin)
pub fn read_snapshot<R: Read>(reader: R, config: &Config) -> AppResult<SummarySnapshot> {
    let snapshot: SummarySnapshot = serde_json::from_reader(reader)?;
    validate_snapshot(&snapshot, config.max_item_price)?;
    tracing::debug!(items = snapshot.items.len(), "Loaded summary snapshot");
    Ok(snapshot)
}

/// Load and validate a snapshot file
pub fn load_snapshot(path: &Path, config: &Config) -> AppResult<SummarySnapshot> {
    let file = File::open(path)?;
    read_snapshot(BufReader::new(file), config)
}
