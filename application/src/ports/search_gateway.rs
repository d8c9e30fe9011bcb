//! Search gateway port
//!
//! Defines the interface for querying the restaurant directory.

use async_trait::async_trait;
use dishide_domain::{Business, DomainError, SearchQuery};
use thiserror::Error;

/// Errors that can occur during a directory search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The directory answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The request never completed (DNS, connect, timeout, ...)
    #[error("Yelp search failed. Check your connection.")]
    Network(String),

    /// The adapter cannot run (e.g. missing API key)
    #[error("Search is not configured: {0}")]
    Configuration(String),
}

impl SearchError {
    /// Upstream failure, falling back to a generic message when the
    /// directory did not provide one
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            format!("Yelp search failed (status {})", status)
        } else {
            message
        };
        SearchError::Upstream { status, message }
    }

    /// Whether trying again later might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            SearchError::Network(_) => true,
            SearchError::Upstream { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Status line for the user; retryable failures say so
    pub fn user_message(&self) -> String {
        if self.is_retryable() {
            format!("{} Try again in a moment.", self)
        } else {
            self.to_string()
        }
    }
}

impl From<DomainError> for SearchError {
    fn from(error: DomainError) -> Self {
        SearchError::Validation(error.to_string())
    }
}

/// Gateway to the restaurant directory
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run a validated query; results are already shaped into [`Business`]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Business>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_falls_back_to_status_message() {
        let err = SearchError::upstream(503, "  ");
        assert_eq!(err.to_string(), "Yelp search failed (status 503)");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_upstream_keeps_provided_message() {
        let err = SearchError::upstream(400, "LOCATION_NOT_FOUND");
        assert_eq!(err.to_string(), "LOCATION_NOT_FOUND");
        assert!(!err.is_retryable());
        assert_eq!(err.user_message(), "LOCATION_NOT_FOUND");
    }

    #[test]
    fn test_network_error_is_generic_and_retryable() {
        let err = SearchError::Network("connection refused".into());
        assert!(err.is_retryable());
        assert_eq!(
            err.user_message(),
            "Yelp search failed. Check your connection. Try again in a moment."
        );
    }

    #[test]
    fn test_from_domain_validation() {
        let err: SearchError = DomainError::Validation("Search term is required".into()).into();
        assert_eq!(err, SearchError::Validation("Search term is required".into()));
    }
}
