//! Solver configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wall-clock budget for one solve call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Configuration for a [`CombinationSolver`](crate::CombinationSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock budget for one `find_combination` call.
    ///
    /// The search aborts in place once the budget is spent and returns the
    /// best combination found so far, flagged as truncated.
    pub time_limit: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl SolverConfig {
    /// Create a configuration with an explicit time limit.
    #[must_use]
    pub const fn with_time_limit(time_limit: Duration) -> Self {
        Self { time_limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_time_limit_is_thirty_seconds() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(30));
    }

    #[test]
    fn with_time_limit_overrides_default() {
        let config = SolverConfig::with_time_limit(Duration::from_millis(250));
        assert_eq!(config.time_limit, Duration::from_millis(250));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = SolverConfig::with_time_limit(Duration::from_secs(5));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
