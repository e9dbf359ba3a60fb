//! Depth-first branch-and-bound with a wall-clock deadline.
//!
//! Items arrive sorted descending, which keeps the remaining-sum bound
//! tight early and lets the include branch skip any item that would
//! overshoot the target: later items are no larger, so an overshoot never
//! recovers. The deadline is a plain `Instant` comparison at the top of
//! every recursive step. There is no preemption, so one step can overshoot
//! the budget; the overshoot is bounded by the cost of a single step and
//! the recursion depth never exceeds the item count.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Combination, LineItem, SearchStats};

/// Mutable state for one solve call.
///
/// Everything here lives for a single `find_combination` invocation, so
/// concurrent solves never share state.
pub(super) struct SearchContext<'a> {
    items: &'a [LineItem],
    remaining: &'a [Decimal],
    target: Decimal,
    deadline: Instant,
    deadline_exceeded: bool,
    best_sum: Decimal,
    best_selection: Vec<usize>,
    working: Vec<usize>,
    nodes_visited: u64,
    nodes_pruned: u64,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(
        items: &'a [LineItem],
        remaining: &'a [Decimal],
        target: Decimal,
        deadline: Instant,
    ) -> Self {
        Self {
            items,
            remaining,
            target,
            deadline,
            deadline_exceeded: false,
            best_sum: Decimal::ZERO,
            best_selection: Vec::new(),
            working: Vec::new(),
            nodes_visited: 0,
            nodes_pruned: 0,
        }
    }

    /// Explore the include/exclude subtree rooted at `index` with running
    /// sum `sum`.
    pub(super) fn explore(&mut self, index: usize, sum: Decimal) {
        if self.deadline_exceeded {
            return;
        }
        if Instant::now() > self.deadline {
            self.deadline_exceeded = true;
            debug!(
                nodes_visited = self.nodes_visited,
                "time limit reached, unwinding search"
            );
            return;
        }
        self.nodes_visited += 1;

        if sum <= self.target && sum > self.best_sum {
            self.best_sum = sum;
            // Copy, not borrow: `working` keeps mutating after this point.
            self.best_selection = self.working.clone();
        }
        if index == self.items.len() {
            return;
        }
        // Even taking every remaining item cannot beat the incumbent.
        // Strict `<`: a subtree that can only tie is still explored.
        if sum + self.remaining[index] < self.best_sum {
            self.nodes_pruned += 1;
            return;
        }

        let amount = self.items[index].amount();
        if sum + amount <= self.target {
            self.working.push(index);
            self.explore(index + 1, sum + amount);
            self.working.pop();
            if self.deadline_exceeded {
                return;
            }
        }
        self.explore(index + 1, sum);
    }

    /// Project the incumbent into the public result.
    pub(super) fn into_combination(self, elapsed: Duration) -> Combination {
        let entries: Vec<LineItem> = self
            .best_selection
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();
        Combination {
            entries,
            achieved_sum: self.best_sum,
            target: self.target,
            time_limit_exceeded: self.deadline_exceeded,
            stats: SearchStats {
                nodes_visited: self.nodes_visited,
                nodes_pruned: self.nodes_pruned,
                elapsed,
            },
        }
    }
}
