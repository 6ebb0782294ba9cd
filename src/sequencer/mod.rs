//! Yearly invoice numbering backed by a key-value store.
//!
//! Numbers have the form `FAC-YYYY-NNN` and restart at 1 every calendar year.
//!
//! # Example
//!
//! ```
//! use facture::sequencer::{InvoiceSequencer, MemoryConfigStore};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let sequencer = InvoiceSequencer::new(MemoryConfigStore::new());
//!
//! // Shown in the invoice form, not yet consumed.
//! let number = sequencer.peek_next_number(2025).await?;
//! assert_eq!(number.to_string(), "FAC-2025-001");
//!
//! // Once the invoice is saved.
//! sequencer.confirm_number(2025).await?;
//! assert_eq!(sequencer.peek_next_number(2025).await?.to_string(), "FAC-2025-002");
//! # Ok::<(), facture::FactureError>(())
//! # }).unwrap();
//! ```

mod invoice;
mod store;

pub use invoice::{InvoiceSequencer, KEY_COUNTER_YEAR, KEY_LAST_YEAR, KEY_NEXT_NUMBER};
pub use store::{ConfigStore, MemoryConfigStore};
