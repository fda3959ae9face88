use rust_decimal::Decimal;
use std::path::PathBuf;

/// Default ceiling for a single price or savings amount
const DEFAULT_MAX_ITEM_PRICE: i64 = 1_000_000;

/// Order summary configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CURRENCY_SYMBOL | $ | Prefix for rendered amounts |
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_DIR | (unset) | Enables daily rotating file logs |
/// | MAX_ITEM_PRICE | 1000000 | Validation ceiling for price/savings |
///
/// # Example
///
/// ```ignore
/// CURRENCY_SYMBOL=€ LOG_LEVEL=debug checkout-summary order.json
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Currency symbol prefixed to amounts
    pub currency_symbol: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// JSON log output
    pub log_json: bool,
    /// Directory for file logs
    pub log_dir: Option<PathBuf>,
    /// Maximum accepted price/savings per item
    pub max_item_price: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            max_item_price: Decimal::from(DEFAULT_MAX_ITEM_PRICE),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            max_item_price: lookup("MAX_ITEM_PRICE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_item_price),
        }
    }
}
