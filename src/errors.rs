//! Error types produced while resolving Pascal's law inputs.

use thiserror::Error;

/// Physical quantity that takes part in Pascal's law.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Force in newtons.
    Force,
    /// Area in square metres.
    Area,
    /// Pressure in pascals.
    Pressure,
}

impl Quantity {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Force => "force",
            Quantity::Area => "area",
            Quantity::Pressure => "pressure",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a [`PhysicalTriple`](crate::PhysicalTriple) cannot be resolved.
///
/// Both variants are recoverable. The [`Display`](std::fmt::Display) text is the
/// human-readable rejection reason shown to users.
///
/// # Examples
///
/// ```
/// use hydrolab::{resolve, ResolutionError};
///
/// let error = resolve(Some(10.0), Some(0.0), None).expect_err("zero area is rejected");
/// assert_eq!(error.reason(), "area must be > 0");
/// assert!(matches!(error, ResolutionError::InvalidDivisor { .. }));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// Returned when fewer than two quantities were supplied.
    #[error("need at least two values")]
    Underdetermined,
    /// Returned when the quantity needed as a divisor is zero or negative.
    #[error("{quantity} must be > 0")]
    InvalidDivisor {
        /// The divisor that failed the strict positivity guard.
        quantity: Quantity,
    },
}

impl ResolutionError {
    /// Human-readable rejection reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Error returned when raw text cannot be turned into a solver input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the text is not a number.
    #[error("that's not a valid number for {quantity} (received {raw:?})")]
    NotANumber {
        /// Field the text was entered for.
        quantity: Quantity,
        /// Rejected text.
        raw: String,
    },
    /// Returned when the parsed value is negative.
    #[error("{quantity} can't be negative (received {value})")]
    Negative {
        /// Field the value was entered for.
        quantity: Quantity,
        /// Rejected value.
        value: f64,
    },
}
