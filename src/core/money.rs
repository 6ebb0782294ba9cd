use rust_decimal::{Decimal, RoundingStrategy};

use super::error::FactureError;

/// Number of decimal places carried by every amount.
pub const MONEY_DP: u32 = 2;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an amount to centimes.
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_DP)
}

/// `base × rate / 100`, rounded to centimes.
pub(crate) fn percent_of(base: Decimal, rate: Decimal) -> Result<Decimal, FactureError> {
    base.checked_mul(rate)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(round_money)
        .ok_or_else(|| overflow(format!("{rate}% of {base}")))
}

pub(crate) fn checked_add(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, FactureError> {
    a.checked_add(b).ok_or_else(|| overflow(what))
}

pub(crate) fn checked_sub(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, FactureError> {
    a.checked_sub(b).ok_or_else(|| overflow(what))
}

pub(crate) fn overflow(what: impl std::fmt::Display) -> FactureError {
    FactureError::Arithmetic(format!("{what} exceeds the decimal range"))
}
