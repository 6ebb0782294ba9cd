//! # facture
//!
//! Financial engine for Algerian invoices: line and discount arithmetic,
//! VAT at the standard and reduced rates, fiscal stamp duty (timbre fiscal),
//! amounts in French words, and yearly `FAC-YYYY-NNN` invoice numbering.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point,
//! and are rounded half away from zero to 2 decimal places.
//!
//! ## Quick Start
//!
//! ```rust
//! use facture::core::*;
//! use rust_decimal_macros::dec;
//!
//! let config = FiscalConfiguration::default();
//! let totals = TotalsBuilder::new(&config)
//!     .add_line(LineItemBuilder::new("Ciment 50 kg", dec!(2), dec!(500)).build())
//!     .add_line(LineItemBuilder::new("Livraison", dec!(1), dec!(1000))
//!         .vat(VatRate::Reduced)
//!         .discount_percent(dec!(10))
//!         .build())
//!     .stamp_duty(true)
//!     .compute()
//!     .unwrap();
//!
//! assert_eq!(totals.total_ht, dec!(1900.00));
//! assert_eq!(totals.vat_standard, dec!(190.00));
//! assert_eq!(totals.vat_reduced, dec!(81.00));
//! assert_eq!(totals.total_ttc, dec!(2171.00));
//! assert_eq!(totals.stamp_duty, dec!(21.71));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Lines, discounts, VAT, stamp duty, totals, invoice number format |
//! | `words` (default) | Amounts in French words |
//! | `sequencer` (default) | Yearly invoice numbering over a key-value store |
//! | `settings` | JSON loading of the fiscal configuration |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "sequencer")]
pub mod sequencer;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
