//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are aggregated in minor units (cents) and converted back to major
//! units with a cent-level rounding at every step, so no partial-precision
//! value reaches a displayed figure.
//!
//! Arithmetic saturates at `Decimal::MAX` / `Decimal::MIN` instead of
//! panicking. Use [`checked_percent_of`] to detect that up front.

use rust_decimal::prelude::*;

/// Fractional digits kept on monetary values
pub const DECIMAL_PLACES: u32 = 2;

/// Minor units per major unit (cents per dollar)
const MINOR_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// Halves round away from zero
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Zero at money scale (0.00)
pub const ZERO: Decimal = Decimal::from_parts(0, 0, 0, false, DECIMAL_PLACES);

/// Round a major-unit amount to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, ROUNDING)
}

/// Major units -> whole minor units (12.345 -> 1235)
#[inline]
pub fn to_minor_units(amount: Decimal) -> Decimal {
    amount
        .saturating_mul(MINOR_PER_MAJOR)
        .round_dp_with_strategy(0, ROUNDING)
}

/// Whole minor units -> major units rounded to cents, always at scale 2
#[inline]
pub fn from_minor_units(minor: Decimal) -> Decimal {
    let mut major = round_money(minor / MINOR_PER_MAJOR);
    major.rescale(DECIMAL_PLACES);
    major
}

/// Sum amounts in minor units, then convert back once
pub fn sum_money<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let minor = amounts
        .into_iter()
        .map(to_minor_units)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    from_minor_units(minor)
}

/// `percent`% of a major-unit amount, rounded to whole cents
///
/// The base is taken in minor units first, so a base that is already
/// cent-exact yields exactly `round(base_cents * percent / 100)` cents.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    let minor = (to_minor_units(base).saturating_mul(percent) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, ROUNDING);
    from_minor_units(minor)
}

/// Same as [`percent_of`], `None` when the product does not fit a `Decimal`
pub fn checked_percent_of(base: Decimal, percent: Decimal) -> Option<Decimal> {
    let base_minor = base
        .checked_mul(MINOR_PER_MAJOR)?
        .round_dp_with_strategy(0, ROUNDING);
    let minor = (base_minor.checked_mul(percent)? / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, ROUNDING);
    Some(from_minor_units(minor))
}

#[cfg(test)]
mod tests;
