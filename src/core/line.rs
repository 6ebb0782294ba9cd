use rust_decimal::Decimal;

use super::config::{DiscountPolicy, FiscalConfiguration};
use super::error::FactureError;
use super::money::{overflow, percent_of, round_money};
use super::types::{Discount, DiscountKind, LineItem, LineResult, VatRate};

/// Pre-tax amount of a line: `quantity × unit_price`, rounded to centimes.
///
/// No business validation happens here: zero or negative inputs simply
/// produce zero or negative amounts. A product outside the `Decimal` range
/// is an [`FactureError::Arithmetic`].
pub fn compute_line_ht(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, FactureError> {
    quantity
        .checked_mul(unit_price)
        .map(round_money)
        .ok_or_else(|| overflow(format!("line amount {quantity} × {unit_price}")))
}

/// Discount amount for `base`, never larger than `base`.
///
/// Discounts only reduce positive bases; for a base of zero or less the
/// discount is zero.
pub fn apply_discount(
    policy: DiscountPolicy,
    base: Decimal,
    discount: &Discount,
) -> Result<Decimal, FactureError> {
    let value = normalize(policy, discount)?;
    if base <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let amount = match discount.kind {
        DiscountKind::Percentage => percent_of(base, value)?,
        DiscountKind::FixedAmount => round_money(value.min(base)),
    };
    Ok(amount.min(base))
}

fn normalize(policy: DiscountPolicy, discount: &Discount) -> Result<Decimal, FactureError> {
    let (low, high) = match discount.kind {
        DiscountKind::Percentage => (Decimal::ZERO, Decimal::ONE_HUNDRED),
        DiscountKind::FixedAmount => (Decimal::ZERO, Decimal::MAX),
    };
    let value = discount.value;
    if value >= low && value <= high {
        return Ok(value);
    }
    match policy {
        DiscountPolicy::Clamp => Ok(value.clamp(low, high)),
        DiscountPolicy::Reject => Err(FactureError::Discount(match discount.kind {
            DiscountKind::Percentage => {
                format!("percentage {value} must be between 0 and 100")
            }
            DiscountKind::FixedAmount => format!("fixed discount {value} must not be negative"),
        })),
    }
}

/// Line amounts after an optional discount.
///
/// `net_ht = gross_ht - discount_amount`, never negative for a positive gross.
pub fn compute_line_with_discount(
    config: &FiscalConfiguration,
    quantity: Decimal,
    unit_price: Decimal,
    vat_rate: VatRate,
    discount: Option<&Discount>,
) -> Result<LineResult, FactureError> {
    let gross_ht = compute_line_ht(quantity, unit_price)?;
    let discount_amount = match discount {
        Some(d) => apply_discount(config.discount_policy, gross_ht, d)?,
        None => Decimal::ZERO,
    };

    Ok(LineResult {
        gross_ht,
        discount_amount,
        net_ht: gross_ht - discount_amount,
        vat_rate,
    })
}

/// [`compute_line_with_discount`] for a [`LineItem`].
pub fn compute_line(
    config: &FiscalConfiguration,
    line: &LineItem,
) -> Result<LineResult, FactureError> {
    compute_line_with_discount(
        config,
        line.quantity,
        line.unit_price,
        line.vat_rate,
        line.discount.as_ref(),
    )
}
