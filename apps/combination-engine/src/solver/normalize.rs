//! Input normalization: parse, filter, sort, and precompute suffix sums.

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::LineItem;
use crate::error::SolverError;

/// Search-ready structures derived from the raw input.
#[derive(Debug, Clone)]
pub(super) struct NormalizedInput {
    /// Surviving items, sorted by amount descending (stable on ties).
    pub items: Vec<LineItem>,
    /// `remaining[i]` is the sum of amounts at sorted index `>= i`;
    /// `remaining[items.len()]` is zero.
    pub remaining: Vec<Decimal>,
    /// The parsed target amount.
    pub target: Decimal,
}

/// Normalize raw rows and the target string.
///
/// Rows that fail to parse or carry a non-positive amount are dropped with
/// a warning; a single bad row never fails the whole call. An unparseable
/// target does.
pub(super) fn normalize<I, S, A>(rows: I, target: &str) -> Result<NormalizedInput, SolverError>
where
    I: IntoIterator<Item = (S, A)>,
    S: Into<String>,
    A: AsRef<str>,
{
    let target = parse_target(target)?;

    let mut items: Vec<LineItem> = Vec::new();
    for (id, raw_amount) in rows {
        match LineItem::parse(id, raw_amount.as_ref()) {
            Ok(item) => items.push(item),
            Err(err) => warn!(%err, "skipping invalid row"),
        }
    }

    // Stable sort: equal amounts keep their input order, which pins the
    // traversal order and keeps results reproducible.
    items.sort_by(|a, b| b.amount().cmp(&a.amount()));

    let mut remaining = vec![Decimal::ZERO; items.len() + 1];
    for i in (0..items.len()).rev() {
        remaining[i] = remaining[i + 1] + items[i].amount();
    }

    Ok(NormalizedInput {
        items,
        remaining,
        target,
    })
}

fn parse_target(raw: &str) -> Result<Decimal, SolverError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| SolverError::InvalidTarget {
            input: raw.to_string(),
            reason: e.to_string(),
        })
}
