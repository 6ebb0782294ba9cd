use rust_decimal::Decimal;
use tracing::trace;

use super::config::FiscalConfiguration;
use super::error::FactureError;
use super::line::{apply_discount, compute_line};
use super::money::{checked_add, checked_sub, overflow, round_money};
use super::tax::{compute_stamp_duty, compute_vat};
use super::types::{Discount, InvoiceTotals, LineItem, LineResult, VatRate};

/// Compute invoice-level totals.
///
/// Per-line discounts are applied first, then the global discount reduces the
/// HT base before VAT. The global discount is split across the VAT bands in
/// proportion to each band's share of the HT total, so the VAT-to-HT ratio of
/// each band stays exact.
///
/// `withholding` is a flat amount deducted from the grand total; it is not
/// recomputed here (see [`compute_withholding`](super::compute_withholding)).
pub fn compute_invoice_totals(
    config: &FiscalConfiguration,
    lines: &[LineItem],
    apply_stamp_duty: bool,
    global_discount: Option<&Discount>,
    withholding: Decimal,
) -> Result<InvoiceTotals, FactureError> {
    let results = lines
        .iter()
        .map(|line| compute_line(config, line))
        .collect::<Result<Vec<LineResult>, _>>()?;

    let mut bases = [Decimal::ZERO; 3];
    for result in &results {
        let band = &mut bases[result.vat_rate.index()];
        *band = checked_add(*band, result.net_ht, "VAT band base")?;
    }
    let total_ht = bases
        .iter()
        .try_fold(Decimal::ZERO, |acc, base| checked_add(acc, *base, "total HT"))?;

    let global = match global_discount {
        Some(discount) => apply_discount(config.discount_policy, total_ht, discount)?,
        None => Decimal::ZERO,
    };

    let shares = split_discount(global, &bases, total_ht)?;
    let base_standard = checked_sub(bases[0], shares[0], "standard base")?;
    let base_reduced = checked_sub(bases[1], shares[1], "reduced base")?;
    let base_exempt = checked_sub(bases[2], shares[2], "exempt base")?;

    let vat_standard = compute_vat(config, base_standard, VatRate::Standard)?;
    let vat_reduced = compute_vat(config, base_reduced, VatRate::Reduced)?;
    let total_vat = checked_add(vat_standard, vat_reduced, "total VAT")?;

    let net_ht = total_ht - global;
    let total_ttc = checked_add(net_ht, total_vat, "total TTC")?;

    let stamp_duty = if apply_stamp_duty {
        compute_stamp_duty(config, total_ttc)?
    } else {
        Decimal::ZERO
    };

    let withholding = round_money(withholding);
    let grand_total = checked_add(total_ttc, stamp_duty, "grand total")
        .and_then(|total| checked_sub(total, withholding, "grand total"))?;

    trace!(
        lines = results.len(),
        %total_ht,
        %global,
        %total_vat,
        %total_ttc,
        %stamp_duty,
        %grand_total,
        "invoice totals computed"
    );

    Ok(InvoiceTotals {
        lines: results,
        total_ht,
        global_discount: global,
        net_ht,
        base_standard,
        base_reduced,
        base_exempt,
        vat_standard,
        vat_reduced,
        total_vat,
        total_ttc,
        stamp_duty,
        withholding,
        grand_total,
    })
}

/// Split `discount` across the bands proportionally to `bases`.
///
/// The last non-empty band absorbs the rounding remainder, so the shares
/// always sum to `discount`.
fn split_discount(
    discount: Decimal,
    bases: &[Decimal; 3],
    total: Decimal,
) -> Result<[Decimal; 3], FactureError> {
    let mut shares = [Decimal::ZERO; 3];
    if discount.is_zero() || total.is_zero() {
        return Ok(shares);
    }

    let Some(last) = bases.iter().rposition(|b| !b.is_zero()) else {
        return Ok(shares);
    };

    let mut allocated = Decimal::ZERO;
    for (share, base) in shares.iter_mut().zip(bases).take(last) {
        if base.is_zero() {
            continue;
        }
        *share = discount
            .checked_mul(*base)
            .and_then(|v| v.checked_div(total))
            .map(round_money)
            .ok_or_else(|| overflow("global discount share"))?;
        allocated = checked_add(allocated, *share, "global discount share")?;
    }
    shares[last] = checked_sub(discount, allocated, "global discount share")?;
    Ok(shares)
}
