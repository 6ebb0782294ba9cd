#![no_main]

use facture::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|lines: Vec<(i32, i32, u8, u16)>| {
    let config = FiscalConfiguration::default();
    let items: Vec<LineItem> = lines
        .into_iter()
        .take(64)
        .map(|(qty, price, rate, discount)| {
            let rate = match rate % 3 {
                0 => VatRate::Standard,
                1 => VatRate::Reduced,
                _ => VatRate::Exempt,
            };
            LineItemBuilder::new("fuzz", Decimal::new(i64::from(qty), 3), Decimal::new(i64::from(price), 2))
                .vat(rate)
                .discount_percent(Decimal::new(i64::from(discount), 2))
                .build()
        })
        .collect();
    // Must not panic; the clamp policy never rejects.
    let _ = compute_invoice_totals(&config, &items, true, None, Decimal::ZERO);
});
