use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT band applied to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatRate {
    /// Standard rate (19% by default).
    Standard,
    /// Reduced rate (9% by default).
    Reduced,
    /// Exempt from VAT.
    Exempt,
}

impl VatRate {
    /// All bands, in the order used for VAT breakdowns.
    pub const ALL: [VatRate; 3] = [VatRate::Standard, VatRate::Reduced, VatRate::Exempt];

    /// Short label used on printed invoices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "TVA normale",
            Self::Reduced => "TVA réduite",
            Self::Exempt => "Exonéré",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Standard => 0,
            Self::Reduced => 1,
            Self::Exempt => 2,
        }
    }
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Value is a percentage of the base (0–100).
    Percentage,
    /// Value is an amount in currency units.
    FixedAmount,
}

/// A discount on a line or on the whole invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub value: Decimal,
    pub kind: DiscountKind,
}

impl Discount {
    pub fn percentage(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountKind::Percentage,
        }
    }

    pub fn fixed(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountKind::FixedAmount,
        }
    }
}

/// An invoice line as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product or service designation.
    pub designation: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Price per unit, excluding VAT.
    pub unit_price: Decimal,
    /// VAT band for this line.
    pub vat_rate: VatRate,
    /// Optional per-line discount.
    pub discount: Option<Discount>,
}

/// Computed amounts for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    /// quantity × unit price, rounded.
    pub gross_ht: Decimal,
    /// Discount deducted from `gross_ht`.
    pub discount_amount: Decimal,
    /// `gross_ht - discount_amount`.
    pub net_ht: Decimal,
    /// VAT band the line belongs to.
    pub vat_rate: VatRate,
}

/// Invoice-level totals. Every amount carries 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Per-line results, in input order.
    pub lines: Vec<LineResult>,
    /// Sum of line net amounts, before the global discount.
    pub total_ht: Decimal,
    /// Global discount deducted from `total_ht`.
    pub global_discount: Decimal,
    /// `total_ht - global_discount`.
    pub net_ht: Decimal,
    /// Standard-rate taxable base after the global discount.
    pub base_standard: Decimal,
    /// Reduced-rate taxable base after the global discount.
    pub base_reduced: Decimal,
    /// Exempt base after the global discount.
    pub base_exempt: Decimal,
    /// VAT at the standard rate.
    pub vat_standard: Decimal,
    /// VAT at the reduced rate.
    pub vat_reduced: Decimal,
    /// `vat_standard + vat_reduced`.
    pub total_vat: Decimal,
    /// `net_ht + total_vat`.
    pub total_ttc: Decimal,
    /// Fiscal stamp duty (zero unless requested).
    pub stamp_duty: Decimal,
    /// Withholding supplied by the caller.
    pub withholding: Decimal,
    /// `total_ttc + stamp_duty - withholding`.
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// Taxable base and VAT amount for one band.
    pub fn breakdown(&self, rate: VatRate) -> (Decimal, Decimal) {
        match rate {
            VatRate::Standard => (self.base_standard, self.vat_standard),
            VatRate::Reduced => (self.base_reduced, self.vat_reduced),
            VatRate::Exempt => (self.base_exempt, Decimal::ZERO),
        }
    }
}
