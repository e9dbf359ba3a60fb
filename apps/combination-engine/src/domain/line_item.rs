//! Line item value object for candidate amounts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// A single candidate row: an opaque identifier and a positive amount.
///
/// Immutable once constructed. The identifier is whatever the caller keys
/// its rows by (an invoice number, a receipt id); the engine never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: String,
    amount: Decimal,
}

impl LineItem {
    /// Create a line item from an identifier and a positive amount.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidItem`] if `amount` is zero or negative.
    pub fn new(id: impl Into<String>, amount: Decimal) -> Result<Self, SolverError> {
        let id = id.into();
        if amount <= Decimal::ZERO {
            return Err(SolverError::InvalidItem {
                id,
                reason: format!("amount must be positive, got {amount}"),
            });
        }
        Ok(Self { id, amount })
    }

    /// Parse a line item from an identifier and a raw amount string.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidItem`] if the string is not a valid
    /// decimal or the parsed amount is not positive.
    pub fn parse(id: impl Into<String>, raw_amount: &str) -> Result<Self, SolverError> {
        let id = id.into();
        match raw_amount.trim().parse::<Decimal>() {
            Ok(amount) => Self::new(id, amount),
            Err(e) => Err(SolverError::InvalidItem {
                id,
                reason: format!("amount '{raw_amount}' is not a decimal: {e}"),
            }),
        }
    }

    /// The opaque identifier this row arrived with.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.id, self.amount)
    }
}
