use rust_decimal::Decimal;

use super::config::FiscalConfiguration;
use super::error::FactureError;
use super::money::percent_of;
use super::types::VatRate;

/// VAT due on `base_ht` for the given band, rounded to centimes.
pub fn compute_vat(
    config: &FiscalConfiguration,
    base_ht: Decimal,
    rate: VatRate,
) -> Result<Decimal, FactureError> {
    match rate {
        VatRate::Standard => percent_of(base_ht, config.standard_vat_rate),
        VatRate::Reduced => percent_of(base_ht, config.reduced_vat_rate),
        VatRate::Exempt => Ok(Decimal::ZERO),
    }
}

/// Fiscal stamp duty (timbre fiscal) on a TTC total.
///
/// The capped amount is then raised to the legal floor: cap first, floor second.
pub fn compute_stamp_duty(
    config: &FiscalConfiguration,
    total_ttc: Decimal,
) -> Result<Decimal, FactureError> {
    if total_ttc <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    Ok(percent_of(total_ttc, config.stamp_duty_rate)?
        .min(config.stamp_duty_cap)
        .max(config.stamp_duty_floor()))
}

/// Withholding (retenue à la source) at the configured default rate.
pub fn compute_withholding(
    config: &FiscalConfiguration,
    base: Decimal,
) -> Result<Decimal, FactureError> {
    percent_of(base, config.default_withholding_rate)
}
