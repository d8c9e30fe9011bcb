//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as search timeouts and result counts.

use dishide_domain::SearchQuery;
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like the timeout for directory
/// searches and how many results to ask for by default.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a search response before giving up.
    pub timeout: Option<Duration>,
    /// Result count used when a search does not specify one.
    pub result_limit: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            result_limit: SearchQuery::DEFAULT_LIMIT,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    /// Set the default result count (clamped when the query is built).
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_behavior() {
        let config = BehaviorConfig::default();
        assert!(config.timeout.is_none());
        assert_eq!(config.result_limit, 8);
    }

    #[test]
    fn test_from_timeout_seconds() {
        let config = BehaviorConfig::from_timeout_seconds(Some(15)).with_result_limit(12);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.result_limit, 12);
    }
}
