//! Edge cases of the calculation core: rounding midpoints, negative input,
//! discount ordering and configuration handling.

use facture::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn config() -> FiscalConfiguration {
    FiscalConfiguration::default()
}

// ---------------------------------------------------------------------------
// Rounding midpoints
// ---------------------------------------------------------------------------

#[test]
fn line_midpoint_rounds_up() {
    // 1 × 10.005 = 10.005 → 10.01 (half away from zero, not banker's 10.00)
    assert_eq!(compute_line_ht(dec!(1), dec!(10.005)).unwrap(), dec!(10.01));
}

#[test]
fn vat_midpoint_rounds_up() {
    // 0.50 × 9% = 0.045 → 0.05
    assert_eq!(compute_vat(&config(), dec!(0.50), VatRate::Reduced).unwrap(), dec!(0.05));
}

#[test]
fn negative_midpoint_rounds_away_from_zero() {
    assert_eq!(compute_line_ht(dec!(-1), dec!(10.005)).unwrap(), dec!(-10.01));
}

// ---------------------------------------------------------------------------
// Invalid numeric input propagates
// ---------------------------------------------------------------------------

#[test]
fn credit_line_reduces_totals() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("Vente", dec!(1), dec!(1000)).build())
        .add_line(LineItemBuilder::new("Retour", dec!(-1), dec!(200)).build())
        .compute()
        .unwrap();
    assert_eq!(t.total_ht, dec!(800));
    assert_eq!(t.vat_standard, dec!(152.00));
}

#[test]
fn negative_invoice_has_no_stamp_duty() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("Avoir", dec!(-2), dec!(500)).build())
        .stamp_duty(true)
        .compute()
        .unwrap();
    assert_eq!(t.total_ttc, dec!(-1190.00));
    assert_eq!(t.stamp_duty, dec!(0));
}

#[test]
fn global_discount_ignored_on_non_positive_total() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("Avoir", dec!(-1), dec!(100)).build())
        .global_discount(Discount::percentage(dec!(50)))
        .compute()
        .unwrap();
    assert_eq!(t.global_discount, dec!(0));
    assert_eq!(t.net_ht, dec!(-100));
}

// ---------------------------------------------------------------------------
// Discount ordering
//
// Exploratory: the global discount is applied to the HT base before VAT,
// split across the bands proportionally. Not a legally validated ordering.
// ---------------------------------------------------------------------------

#[test]
fn global_discount_before_vat() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(1000)).build())
        .global_discount(Discount::percentage(dec!(10)))
        .stamp_duty(true)
        .compute()
        .unwrap();
    assert_eq!(t.net_ht, dec!(900.00));
    assert_eq!(t.vat_standard, dec!(171.00));
    assert_eq!(t.total_ttc, dec!(1071.00));
    assert_eq!(t.stamp_duty, dec!(10.71));
    assert_eq!(t.grand_total, dec!(1081.71));
}

#[test]
fn fixed_global_discount_capped_at_total() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(300)).build())
        .global_discount(Discount::fixed(dec!(1000)))
        .stamp_duty(true)
        .compute()
        .unwrap();
    assert_eq!(t.global_discount, dec!(300));
    assert_eq!(t.net_ht, dec!(0));
    assert_eq!(t.total_ttc, dec!(0));
    assert_eq!(t.stamp_duty, dec!(0));
}

#[test]
fn line_then_global_discount() {
    let t = TotalsBuilder::new(&config())
        .add_line(
            LineItemBuilder::new("A", dec!(10), dec!(100))
                .discount_percent(dec!(10))
                .build(),
        )
        .global_discount(Discount::fixed(dec!(100)))
        .compute()
        .unwrap();
    assert_eq!(t.total_ht, dec!(900.00));
    assert_eq!(t.net_ht, dec!(800.00));
    assert_eq!(t.vat_standard, dec!(152.00));
}

#[test]
fn global_discount_spares_vat_ratio_per_band() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(2000)).build())
        .add_line(
            LineItemBuilder::new("B", dec!(1), dec!(1000))
                .vat(VatRate::Exempt)
                .build(),
        )
        .global_discount(Discount::percentage(dec!(20)))
        .compute()
        .unwrap();
    assert_eq!(t.base_standard, dec!(1600.00));
    assert_eq!(t.base_exempt, dec!(800.00));
    assert_eq!(t.vat_standard, dec!(304.00));
    assert_eq!(t.vat_reduced, dec!(0));
}

// ---------------------------------------------------------------------------
// Withholding
// ---------------------------------------------------------------------------

#[test]
fn withholding_is_rounded_and_deducted() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(100)).build())
        .withholding(dec!(10.005))
        .compute()
        .unwrap();
    assert_eq!(t.withholding, dec!(10.01));
    assert_eq!(t.grand_total, dec!(108.99));
}

#[test]
fn withholding_after_stamp() {
    let t = TotalsBuilder::new(&config())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(1000)).build())
        .stamp_duty(true)
        .withholding(dec!(100))
        .compute()
        .unwrap();
    // 1190 + 11.90 - 100
    assert_eq!(t.grand_total, dec!(1101.90));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn zero_rates_allowed() {
    let c = FiscalConfigurationBuilder::new()
        .standard_vat_rate(Decimal::ZERO)
        .stamp_duty_rate(Decimal::ZERO)
        .build()
        .unwrap();
    assert_eq!(compute_vat(&c, dec!(1000), VatRate::Standard).unwrap(), dec!(0));
    // the floor still applies
    assert_eq!(compute_stamp_duty(&c, dec!(1000)).unwrap(), dec!(5));
}

#[test]
fn cap_below_floor_rejected() {
    let err = FiscalConfigurationBuilder::new()
        .stamp_duty_cap(dec!(4.99))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("stamp_duty_cap"));
}

#[cfg(feature = "settings")]
#[test]
fn settings_file_roundtrip_through_holder() {
    let json = r#"{
        "standard_vat_rate": "19",
        "reduced_vat_rate": "9",
        "stamp_duty_rate": "1",
        "stamp_duty_cap": "10000",
        "default_withholding_rate": "5"
    }"#;
    let settings = FiscalSettings::new(FiscalConfiguration::from_json(json).unwrap());
    let snapshot = settings.snapshot();
    assert_eq!(snapshot.stamp_duty_cap, dec!(10000));
    assert_eq!(compute_stamp_duty(&snapshot, dec!(500000)).unwrap(), dec!(5000.00));
    assert_eq!(compute_withholding(&snapshot, dec!(1000)).unwrap(), dec!(50.00));
}
