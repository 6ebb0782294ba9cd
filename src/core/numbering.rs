use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::FactureError;

/// Prefix of every invoice number.
pub const INVOICE_PREFIX: &str = "FAC";

/// Minimum width of the sequential part ("001").
const ZERO_PAD: usize = 3;

/// Year-scoped invoice number, displayed as `FAC-{year}-{sequence}`,
/// e.g. "FAC-2025-001", "FAC-2025-1042".
///
/// The sequence is zero-padded to at least 3 digits and never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvoiceNumber {
    year: i32,
    sequence: u64,
}

impl InvoiceNumber {
    pub fn new(year: i32, sequence: u64) -> Self {
        Self { year, sequence }
    }

    /// First number of the year of `date`.
    pub fn first_of(date: NaiveDate) -> Self {
        Self::new(date.year(), 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The sequential part, without formatting.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The number that follows this one in the same year.
    ///
    /// Fails when the sequence is already at `u64::MAX`; a counter never wraps.
    pub fn next(&self) -> Result<Self, FactureError> {
        let sequence = self.sequence.checked_add(1).ok_or_else(|| {
            FactureError::Numbering(format!("invoice counter exhausted after {self}"))
        })?;
        Ok(Self::new(self.year, sequence))
    }

    /// Parse the `FAC-YYYY-NNN` form.
    pub fn parse(s: &str) -> Result<Self, FactureError> {
        let invalid = || FactureError::Numbering(format!("invalid invoice number {s:?}"));

        let mut parts = s.split('-');
        let (Some(prefix), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if prefix != INVOICE_PREFIX
            || year.len() != 4
            || sequence.len() < ZERO_PAD
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !sequence.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let sequence = sequence.parse().map_err(|_| invalid())?;
        Ok(Self::new(year, sequence))
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{INVOICE_PREFIX}-{:04}-{:0>width$}",
            self.year,
            self.sequence,
            width = ZERO_PAD
        )
    }
}

impl FromStr for InvoiceNumber {
    type Err = FactureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
