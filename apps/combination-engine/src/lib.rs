// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Combination Engine - Rust Core Library
//!
//! Deterministic amount-combination solver for the Tally reconciliation
//! system.
//!
//! Given candidate rows of `(identifier, amount)` and a target amount, the
//! engine selects the subset whose sum is the largest value not exceeding
//! the target (0/1 knapsack with value equal to weight), using depth-first
//! branch-and-bound under a wall-clock budget. The search is anytime: when
//! the budget runs out it stops where it stands and returns the best
//! combination found so far, flagged as truncated.
//!
//! All amounts are exact decimals end-to-end; binary floating point is
//! never used, so cent-level sums stay exact.
//!
//! # Example
//!
//! ```
//! use combination_engine::{CombinationSolver, SolverConfig};
//!
//! let rows = vec![("F-1001", "60.00"), ("F-1002", "50.00"), ("F-1003", "40.00")];
//! let solver = CombinationSolver::new(rows, "100", SolverConfig::default())?;
//! let combination = solver.find_combination();
//! assert_eq!(combination.achieved_sum.to_string(), "100.00");
//! assert!(!combination.time_limit_exceeded);
//! # Ok::<(), combination_engine::SolverError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Solver configuration.
pub mod config;

/// Domain value objects.
pub mod domain;

/// Typed solver errors.
pub mod error;

/// Normalization, search engine, and result assembly.
pub mod solver;

pub use config::{DEFAULT_TIME_LIMIT, SolverConfig};
pub use domain::{Combination, LineItem, SearchStats};
pub use error::SolverError;
pub use solver::CombinationSolver;
