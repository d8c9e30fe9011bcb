//! Restaurant directory adapters
//!
//! Provides [`YelpSearchGateway`], which implements the
//! [`SearchGateway`](dishide_application::SearchGateway) port against the
//! Yelp Fusion business search API, and [`UnavailableSearchGateway`] for
//! when no API key is configured.

mod unavailable;
mod yelp;

pub use unavailable::UnavailableSearchGateway;
pub use yelp::{YelpSearchGateway, shape_businesses};
