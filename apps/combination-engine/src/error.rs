//! Solver errors.

use thiserror::Error;

/// Errors produced while building a solver or constructing its line items.
///
/// A time-limit truncation is deliberately NOT an error: it is reported on
/// the result as [`Combination::time_limit_exceeded`](crate::Combination)
/// alongside an otherwise valid, best-effort selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The target amount string is not a valid decimal.
    ///
    /// This fails [`CombinationSolver::new`](crate::CombinationSolver::new)
    /// before any search begins and must be surfaced to the caller as a
    /// rejected request, never silently defaulted.
    #[error("invalid target amount '{input}': {reason}")]
    InvalidTarget {
        /// The raw target string supplied by the caller.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A row's amount failed to parse or was not positive.
    ///
    /// Normalization recovers from this by dropping the row with a warning;
    /// the variant surfaces only to hosts constructing
    /// [`LineItem`](crate::LineItem)s directly.
    #[error("invalid item '{id}': {reason}")]
    InvalidItem {
        /// Identifier of the offending row.
        id: String,
        /// Why the amount was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_display() {
        let err = SolverError::InvalidTarget {
            input: "12,34x".to_string(),
            reason: "Invalid decimal: unknown character".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("12,34x"));
        assert!(msg.contains("unknown character"));
    }

    #[test]
    fn invalid_item_display() {
        let err = SolverError::InvalidItem {
            id: "F-0042".to_string(),
            reason: "amount must be positive, got -3.50".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("F-0042"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn solver_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SolverError::InvalidTarget {
            input: "x".to_string(),
            reason: "test".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
