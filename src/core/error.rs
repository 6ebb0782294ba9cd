use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the financial engine and the invoice sequencer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactureError {
    /// One or more configuration rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An amount left the range `Decimal` can represent.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A discount value was rejected by [`DiscountPolicy::Reject`](super::DiscountPolicy::Reject).
    #[error("discount error: {0}")]
    Discount(String),

    /// The amount cannot be rendered in words.
    #[error("amount {amount} is out of range (maximum magnitude {max})")]
    AmountOutOfRange { amount: Decimal, max: Decimal },

    /// Invoice number parsing error, or an exhausted counter.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// The key-value store backing the sequencer failed.
    #[error("config store error: {0}")]
    Store(String),

    /// Fiscal configuration could not be read or written.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "stamp_duty_cap").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into a single message.
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
