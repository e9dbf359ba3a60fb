//! Combination result value object.

use std::fmt;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Counters describing how much of the search tree one solve call visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Recursive steps evaluated.
    pub nodes_visited: u64,
    /// Subtrees cut off by the remaining-sum bound.
    pub nodes_pruned: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// Result of one combination search.
///
/// When [`time_limit_exceeded`](Self::time_limit_exceeded) is set the
/// selection is best-effort: it is still feasible (never exceeds a positive
/// target) but is not certified optimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Chosen line items, in the order the search included them.
    pub entries: Vec<LineItem>,
    /// Exact sum of the chosen amounts.
    pub achieved_sum: Decimal,
    /// The target amount the caller asked for, echoed back.
    pub target: Decimal,
    /// True when the search was cut off by the time budget.
    pub time_limit_exceeded: bool,
    /// Search counters for this solve call.
    pub stats: SearchStats,
}

impl Combination {
    /// The trivial empty result for degenerate input (non-positive target
    /// or no valid items).
    #[must_use]
    pub fn empty(target: Decimal) -> Self {
        Self {
            entries: Vec::new(),
            achieved_sum: Decimal::ZERO,
            target,
            time_limit_exceeded: false,
            stats: SearchStats::default(),
        }
    }

    /// Project the chosen entries as `(id, amount)` strings with two
    /// fraction digits, the way reports render them.
    #[must_use]
    pub fn display_entries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|item| (item.id().to_string(), format!("{:.2}", item.amount())))
            .collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} of {:.2} across {} item(s)",
            self.achieved_sum,
            self.target,
            self.entries.len()
        )?;
        if self.time_limit_exceeded {
            write!(f, " (time limit exceeded)")?;
        }
        Ok(())
    }
}
