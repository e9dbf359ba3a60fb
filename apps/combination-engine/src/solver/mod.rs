//! Time-bounded combination search over monetary line items.
//!
//! Given rows of `(identifier, amount)` candidates and a target amount,
//! the solver selects the subset whose sum is the largest value not
//! exceeding the target: an instance of 0/1 knapsack with value equal to
//! weight, explored by depth-first branch-and-bound. The search is an
//! anytime algorithm: when the wall-clock budget runs out it stops where
//! it stands and returns the best combination found so far, flagged as
//! truncated.

mod normalize;
mod search;

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::SolverConfig;
use crate::domain::{Combination, LineItem};
use crate::error::SolverError;
use search::SearchContext;

/// Deterministic subset-sum solver for monetary amounts.
///
/// Construction normalizes the input once (parse, filter, sort, suffix
/// sums); [`find_combination`](Self::find_combination) may then be called
/// any number of times, each call getting a fresh incumbent and a fresh
/// time budget. Solving takes `&self` and keeps all mutable state local to
/// the call, so one solver shared across threads runs independent solves.
#[derive(Debug, Clone)]
pub struct CombinationSolver {
    items: Vec<LineItem>,
    remaining: Vec<Decimal>,
    target: Decimal,
    config: SolverConfig,
}

impl CombinationSolver {
    /// Build a solver from raw `(identifier, amount-string)` rows.
    ///
    /// Rows whose amount fails to parse or is not positive are dropped
    /// with a warning; a single bad row never aborts the computation. A
    /// non-positive target is accepted and later yields the trivial empty
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidTarget`] when `target` is not a valid
    /// decimal.
    pub fn new<I, S, A>(rows: I, target: &str, config: SolverConfig) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: AsRef<str>,
    {
        let normalized = normalize::normalize(rows, target)?;
        Ok(Self {
            items: normalized.items,
            remaining: normalized.remaining,
            target: normalized.target,
            config,
        })
    }

    /// The parsed target amount.
    #[must_use]
    pub const fn target(&self) -> Decimal {
        self.target
    }

    /// The normalized items, sorted by amount descending.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Run the search and return the best combination found.
    ///
    /// A non-positive target or an empty item set short-circuits to the
    /// trivial empty result without searching. Otherwise the search runs
    /// until the tree is exhausted or the configured time limit expires,
    /// whichever comes first.
    #[must_use]
    pub fn find_combination(&self) -> Combination {
        if self.target <= Decimal::ZERO || self.items.is_empty() {
            return Combination::empty(self.target);
        }

        let started = Instant::now();
        let mut ctx = SearchContext::new(
            &self.items,
            &self.remaining,
            self.target,
            started + self.config.time_limit,
        );
        ctx.explore(0, Decimal::ZERO);

        let combination = ctx.into_combination(started.elapsed());
        info!(
            elapsed_ms = combination.stats.elapsed.as_millis() as u64,
            achieved_sum = %combination.achieved_sum,
            nodes_visited = combination.stats.nodes_visited,
            nodes_pruned = combination.stats.nodes_pruned,
            "combination search completed"
        );
        if combination.time_limit_exceeded {
            warn!(
                time_limit_ms = self.config.time_limit.as_millis() as u64,
                "search stopped at the time limit; combination is best-effort"
            );
        }
        combination
    }
}
