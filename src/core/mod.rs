//! Invoice calculation core: lines, discounts, VAT, stamp duty and totals.
//!
//! Every function takes the [`FiscalConfiguration`] it should use as an
//! explicit argument; none of them read global state.

mod builder;
mod config;
mod error;
mod line;
pub mod money;
mod numbering;
mod tax;
mod totals;
mod types;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use line::*;
pub use money::round_money;
pub use numbering::*;
pub use tax::*;
pub use totals::*;
pub use types::*;
