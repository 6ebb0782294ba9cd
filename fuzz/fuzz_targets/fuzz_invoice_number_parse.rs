#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → display → parse must agree whenever the first parse succeeds.
        if let Ok(number) = facture::InvoiceNumber::parse(s) {
            let again = facture::InvoiceNumber::parse(&number.to_string());
            assert_eq!(again.ok(), Some(number));
        }
    }
});
