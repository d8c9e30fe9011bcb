//! Yelp Fusion business search adapter.
//!
//! Sends `GET /v3/businesses/search` with a bearer key and shapes the
//! `businesses` array into [`Business`] records:
//!
//! | Yelp field | Record field |
//! |------------|--------------|
//! | `categories[].title` | `categories` (blank titles dropped) |
//! | `location.display_address` | `address` (joined with `", "`) |
//! | `rating`, `price`, `image_url` | optional, `None` when absent |

use async_trait::async_trait;
use dishide_application::{SearchError, SearchGateway};
use dishide_domain::{Business, SearchLocation, SearchQuery};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("dishide/", env!("CARGO_PKG_VERSION"));

/// [`SearchGateway`] backed by the Yelp Fusion API
pub struct YelpSearchGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl YelpSearchGateway {
    /// Build a gateway; fails when no API key is available
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SearchError::Configuration("Missing Yelp API key".to_string()))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SearchError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

/// Query string for a validated search
fn query_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("term", query.term().to_string()),
        ("limit", query.limit().to_string()),
    ];
    match query.location() {
        SearchLocation::Coordinates {
            latitude,
            longitude,
        } => {
            params.push(("latitude", latitude.to_string()));
            params.push(("longitude", longitude.to_string()));
        }
        SearchLocation::Place(place) => params.push(("location", place.clone())),
    }
    params
}

/// Shape a Yelp search payload into directory records
///
/// Entries without an id or a name are skipped.
pub fn shape_businesses(payload: &Value) -> Vec<Business> {
    let Some(businesses) = payload.get("businesses").and_then(Value::as_array) else {
        return Vec::new();
    };

    businesses.iter().filter_map(shape_business).collect()
}

fn shape_business(raw: &Value) -> Option<Business> {
    let text = |key: &str| {
        raw.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let id = text("id")?;
    let name = text("name")?;

    let categories = raw
        .get("categories")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|c| c.get("title").and_then(Value::as_str))
                .filter(|title| !title.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let address = raw
        .pointer("/location/display_address")
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    Some(Business {
        id,
        name,
        rating: raw.get("rating").and_then(Value::as_f64),
        price: text("price"),
        categories,
        image_url: text("image_url"),
        url: text("url").unwrap_or_default(),
        address,
    })
}

#[async_trait]
impl SearchGateway for YelpSearchGateway {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Business>, SearchError> {
        debug!(term = query.term(), location = %query.location(), "Calling Yelp search");

        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.api_key)
            .query(&query_params(query))
            .send()
            .await
            .map_err(|e| {
                warn!("Yelp request failed: {}", e);
                SearchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.trim().is_empty() {
                "Yelp error".to_string()
            } else {
                text
            };
            warn!(status = status.as_u16(), "Yelp returned an error");
            return Err(SearchError::upstream(status.as_u16(), message));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| SearchError::Network(format!("Unreadable Yelp response: {}", e)))?;

        Ok(shape_businesses(&payload))
    }
}
