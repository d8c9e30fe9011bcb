//! Search Restaurants use case
//!
//! Validates a raw search request, runs it against the directory and
//! reports the outcome as status lines.

use crate::config::BehaviorConfig;
use crate::ports::room_event_logger::{NoRoomEventLogger, RoomEvent, RoomEventLogger};
use crate::ports::search_gateway::{SearchError, SearchGateway};
use crate::ports::status::{NoStatus, StatusNotifier};
use dishide_domain::{Business, RoomId, SearchLocation, SearchQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the SearchRestaurants use case
///
/// Fields are kept raw until [`SearchRestaurantsInput::to_query`] so that
/// every validation rule runs in one place before any request is made.
#[derive(Debug, Clone, Default)]
pub struct SearchRestaurantsInput {
    pub term: String,
    pub place: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub limit: Option<usize>,
}

impl SearchRestaurantsInput {
    pub fn near_place(term: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            place: Some(place.into()),
            ..Self::default()
        }
    }

    /// Coordinates stay raw text; [`Self::to_query`] rejects non-numbers
    pub fn near_coordinates(
        term: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Self::default()
        }
    }

    /// Validate into a [`SearchQuery`]
    pub fn to_query(&self, default_limit: usize) -> Result<SearchQuery, SearchError> {
        let query = SearchQuery::parse(
            &self.term,
            self.place.as_deref(),
            self.latitude.as_deref(),
            self.longitude.as_deref(),
        )?;
        Ok(query.with_limit(self.limit.unwrap_or(default_limit)))
    }
}

/// Use case for searching the restaurant directory
pub struct SearchRestaurantsUseCase<G: SearchGateway + ?Sized> {
    gateway: Arc<G>,
    behavior: BehaviorConfig,
    events: Arc<dyn RoomEventLogger>,
    room: RoomId,
}

impl<G: SearchGateway + ?Sized> SearchRestaurantsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            events: Arc::new(NoRoomEventLogger),
            room: RoomId::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Record searches in a room's event log
    pub fn with_events(mut self, room: RoomId, events: Arc<dyn RoomEventLogger>) -> Self {
        self.room = room;
        self.events = events;
        self
    }

    /// Execute the use case without status output
    pub async fn execute(
        &self,
        input: SearchRestaurantsInput,
    ) -> Result<Vec<Business>, SearchError> {
        self.execute_with_status(input, &NoStatus).await
    }

    /// Execute the use case, reporting progress and failures as status lines
    pub async fn execute_with_status(
        &self,
        input: SearchRestaurantsInput,
        status: &dyn StatusNotifier,
    ) -> Result<Vec<Business>, SearchError> {
        let query = match input.to_query(self.behavior.result_limit) {
            Ok(query) => query,
            Err(e) => {
                debug!("Rejected search before sending: {}", e);
                status.on_error(&e.to_string());
                return Err(e);
            }
        };

        info!(
            "Searching for '{}' near {} (limit {})",
            query.term(),
            query.location(),
            query.limit()
        );
        status.on_status("Summoning Yelp magic...");

        match self.gateway.search(&query).await {
            Ok(mut results) => {
                results.truncate(query.limit());
                let count = results.len();
                status.on_status(&format!(
                    "Feast alert: {} {} ready",
                    count,
                    if count == 1 { "spot" } else { "spots" }
                ));
                self.log_search(&query, Some(count), None);
                Ok(results)
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", query.term(), e);
                status.on_error(&e.user_message());
                self.log_search(&query, None, Some(&e));
                Err(e)
            }
        }
    }

    fn log_search(&self, query: &SearchQuery, results: Option<usize>, error: Option<&SearchError>) {
        let location = match query.location() {
            SearchLocation::Place(place) => serde_json::json!({ "place": place }),
            SearchLocation::Coordinates {
                latitude,
                longitude,
            } => serde_json::json!({ "latitude": latitude, "longitude": longitude }),
        };
        self.events.log(RoomEvent::new(
            "search",
            &self.room,
            serde_json::json!({
                "term": query.term(),
                "location": location,
                "limit": query.limit(),
                "results": results,
                "error": error.map(|e| e.to_string()),
            }),
        ));
    }
}
