//! Amounts in words, as printed at the foot of an invoice.
//!
//! French numbering rules with the Algerian dinar as currency:
//!
//! | Amount | Words |
//! |--------|-------|
//! | 0 | zéro dinar algérien |
//! | 1 | Un dinar algérien |
//! | 71 | Soixante-et-onze dinars algériens |
//! | 80 | Quatre-vingts dinars algériens |
//! | 201.01 | Deux cent un dinars algériens et un centime |
//!
//! # Example
//!
//! ```
//! use facture::words::amount_to_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(amount_to_words(dec!(91)).unwrap(), "Quatre-vingt-onze dinars algériens");
//! assert!(amount_to_words(dec!(1_000_000_000_000)).is_err());
//! ```

mod french;

pub use french::{MAX_WORDS_AMOUNT, MAX_WORDS_INTEGER, ZERO_AMOUNT, amount_to_words, spell_integer};
