#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (i64, u8)| {
    let (mantissa, scale) = input;
    // Out-of-range amounts must fail with an error, never panic.
    let amount = Decimal::new(mantissa, u32::from(scale % 29));
    let _ = facture::words::amount_to_words(amount);
});
