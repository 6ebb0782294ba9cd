use rust_decimal::Decimal;

use super::config::FiscalConfiguration;
use super::error::FactureError;
use super::money::checked_sub;
use super::tax::compute_withholding;
use super::totals::compute_invoice_totals;
use super::types::*;

/// Builder for computing invoice totals.
///
/// ```
/// use facture::core::*;
/// use rust_decimal_macros::dec;
///
/// let config = FiscalConfiguration::default();
/// let totals = TotalsBuilder::new(&config)
///     .add_line(LineItemBuilder::new("Ordinateur portable", dec!(2), dec!(500)).build())
///     .stamp_duty(true)
///     .compute()
///     .unwrap();
///
/// assert_eq!(totals.total_ttc, dec!(1190.00));
/// assert_eq!(totals.grand_total, dec!(1201.90));
/// ```
pub struct TotalsBuilder<'a> {
    config: &'a FiscalConfiguration,
    lines: Vec<LineItem>,
    apply_stamp_duty: bool,
    global_discount: Option<Discount>,
    withholding: Withholding,
}

enum Withholding {
    Flat(Decimal),
    DefaultRate,
}

impl<'a> TotalsBuilder<'a> {
    pub fn new(config: &'a FiscalConfiguration) -> Self {
        Self {
            config,
            lines: Vec::new(),
            apply_stamp_duty: false,
            global_discount: None,
            withholding: Withholding::Flat(Decimal::ZERO),
        }
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = LineItem>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Charge the fiscal stamp duty (cash-settled invoices).
    pub fn stamp_duty(mut self, apply: bool) -> Self {
        self.apply_stamp_duty = apply;
        self
    }

    pub fn global_discount(mut self, discount: Discount) -> Self {
        self.global_discount = Some(discount);
        self
    }

    /// Deduct a flat, pre-computed withholding amount.
    pub fn withholding(mut self, amount: Decimal) -> Self {
        self.withholding = Withholding::Flat(amount);
        self
    }

    /// Deduct withholding at the configured default rate, applied to the HT
    /// total after the global discount.
    pub fn withholding_at_default_rate(mut self) -> Self {
        self.withholding = Withholding::DefaultRate;
        self
    }

    pub fn compute(self) -> Result<InvoiceTotals, FactureError> {
        let discount = self.global_discount.as_ref();
        match self.withholding {
            Withholding::Flat(amount) => compute_invoice_totals(
                self.config,
                &self.lines,
                self.apply_stamp_duty,
                discount,
                amount,
            ),
            Withholding::DefaultRate => {
                let mut totals = compute_invoice_totals(
                    self.config,
                    &self.lines,
                    self.apply_stamp_duty,
                    discount,
                    Decimal::ZERO,
                )?;
                let amount = compute_withholding(self.config, totals.net_ht)?;
                totals.withholding = amount;
                totals.grand_total = checked_sub(totals.grand_total, amount, "grand total")?;
                Ok(totals)
            }
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    designation: String,
    quantity: Decimal,
    unit_price: Decimal,
    vat_rate: VatRate,
    discount: Option<Discount>,
}

impl LineItemBuilder {
    /// New line at the standard VAT rate, without discount.
    pub fn new(designation: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            designation: designation.into(),
            quantity,
            unit_price,
            vat_rate: VatRate::Standard,
            discount: None,
        }
    }

    pub fn vat(mut self, rate: VatRate) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn discount_percent(self, percent: Decimal) -> Self {
        self.discount(Discount::percentage(percent))
    }

    pub fn discount_amount(self, amount: Decimal) -> Self {
        self.discount(Discount::fixed(amount))
    }

    pub fn build(self) -> LineItem {
        LineItem {
            designation: self.designation,
            quantity: self.quantity,
            unit_price: self.unit_price,
            vat_rate: self.vat_rate,
            discount: self.discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_builder_defaults() {
        let line = LineItemBuilder::new("Vis", dec!(100), dec!(2.5)).build();
        assert_eq!(line.vat_rate, VatRate::Standard);
        assert!(line.discount.is_none());
    }

    #[test]
    fn line_builder_discounts() {
        let line = LineItemBuilder::new("Vis", dec!(100), dec!(2.5))
            .vat(VatRate::Reduced)
            .discount_percent(dec!(5))
            .build();
        assert_eq!(line.discount, Some(Discount::percentage(dec!(5))));

        let line = LineItemBuilder::new("Vis", dec!(1), dec!(2.5))
            .discount_amount(dec!(1))
            .build();
        assert_eq!(line.discount.unwrap().kind, DiscountKind::FixedAmount);
    }

    #[test]
    fn totals_builder_default_rate_withholding() {
        let config = FiscalConfiguration {
            default_withholding_rate: dec!(5),
            ..Default::default()
        };
        let t = TotalsBuilder::new(&config)
            .add_line(LineItemBuilder::new("Audit", dec!(1), dec!(10000)).build())
            .global_discount(Discount::fixed(dec!(2000)))
            .withholding_at_default_rate()
            .compute()
            .unwrap();
        assert_eq!(t.net_ht, dec!(8000));
        assert_eq!(t.total_ttc, dec!(9520.00));
        assert_eq!(t.withholding, dec!(400.00));
        assert_eq!(t.grand_total, dec!(9120.00));
    }

    #[test]
    fn totals_builder_matches_function() {
        let config = FiscalConfiguration::default();
        let lines = vec![
            LineItemBuilder::new("A", dec!(3), dec!(19.99)).build(),
            LineItemBuilder::new("B", dec!(1), dec!(5))
                .vat(VatRate::Exempt)
                .build(),
        ];
        let via_builder = TotalsBuilder::new(&config)
            .lines(lines.clone())
            .stamp_duty(true)
            .withholding(dec!(1))
            .compute()
            .unwrap();
        let direct = compute_invoice_totals(&config, &lines, true, None, dec!(1)).unwrap();
        assert_eq!(via_builder, direct);
    }
}
