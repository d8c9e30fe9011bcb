//! Gateway used when directory search cannot be configured

use async_trait::async_trait;
use dishide_application::{SearchError, SearchGateway};
use dishide_domain::{Business, SearchQuery};

/// Fails every search with the error that prevented configuration
///
/// Lets a room keep working (votes, locks, spins) without an API key.
pub struct UnavailableSearchGateway {
    reason: SearchError,
}

impl UnavailableSearchGateway {
    pub fn new(reason: SearchError) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl SearchGateway for UnavailableSearchGateway {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<Business>, SearchError> {
        Err(self.reason.clone())
    }
}
