//! Promo rate - order-level percentage discount

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order-level promo percentage (10 = 10% off the subtotal)
///
/// Zero means "no promo". The range is not checked here: a negative or
/// >100 rate still produces an arithmetically consistent discount.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct PromoRate(Decimal);

impl PromoRate {
    /// No promo applied
    pub const NONE: PromoRate = PromoRate(Decimal::ZERO);

    pub fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Percentage value
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Whether a promo is in effect (non-zero rate)
    pub fn is_active(&self) -> bool {
        !self.0.is_zero()
    }

    /// Whether the rate lies within 0..=100
    pub fn is_in_range(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE_HUNDRED
    }
}

impl From<Decimal> for PromoRate {
    fn from(percent: Decimal) -> Self {
        Self(percent)
    }
}

impl FromStr for PromoRate {
    type Err = rust_decimal::Error;

    /// Blank input means no promo
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::NONE);
        }
        Decimal::from_str(trimmed).map(Self)
    }
}

impl fmt::Display for PromoRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

/// The store may hold the promo as a number or as the text the user typed
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPromo {
    Number(Decimal),
    Text(String),
}

impl<'de> Deserialize<'de> for PromoRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPromo::deserialize(deserializer)? {
            RawPromo::Number(value) => Ok(Self(value)),
            RawPromo::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
