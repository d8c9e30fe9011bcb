//! Validated search query

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where to search: a free-text place or a coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchLocation {
    Place(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl SearchLocation {
    /// Build a coordinate location, rejecting non-finite values
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::Validation(
                "Latitude/longitude must be numbers".to_string(),
            ));
        }
        Ok(Self::Coordinates {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for SearchLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchLocation::Place(place) => write!(f, "{}", place),
            SearchLocation::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{:.4}, {:.4}", latitude, longitude),
        }
    }
}

/// A search request that has passed boundary validation (Value Object)
///
/// # Example
///
/// ```
/// use dishide_domain::search::{SearchLocation, SearchQuery};
///
/// let query = SearchQuery::new("  ramen ", SearchLocation::Place("Seattle".into()))
///     .unwrap()
///     .with_limit(50);
/// assert_eq!(query.term(), "ramen");
/// assert_eq!(query.limit(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    term: String,
    location: SearchLocation,
    limit: usize,
}

impl SearchQuery {
    /// Result count when none is requested
    pub const DEFAULT_LIMIT: usize = 8;
    /// Hard ceiling imposed by the directory
    pub const MAX_LIMIT: usize = 20;

    /// Create a query; the term must be non-empty after trimming
    pub fn new(term: &str, location: SearchLocation) -> Result<Self, DomainError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DomainError::Validation(
                "Search term is required".to_string(),
            ));
        }

        let location = match location {
            SearchLocation::Place(place) => {
                let place = place.trim();
                if place.is_empty() {
                    return Err(Self::missing_location());
                }
                SearchLocation::Place(place.to_string())
            }
            SearchLocation::Coordinates {
                latitude,
                longitude,
            } => SearchLocation::coordinates(latitude, longitude)?,
        };

        Ok(Self {
            term: term.to_string(),
            location,
            limit: Self::DEFAULT_LIMIT,
        })
    }

    /// Parse raw, untyped request fields
    ///
    /// Coordinates win when both are present; otherwise a non-blank place is
    /// required. Nothing here touches the network.
    pub fn parse(
        term: &str,
        place: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, DomainError> {
        if term.trim().is_empty() {
            return Err(DomainError::Validation(
                "Search term is required".to_string(),
            ));
        }

        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        let location = match (non_blank(latitude), non_blank(longitude)) {
            (Some(lat), Some(lon)) => {
                let (Ok(lat), Ok(lon)) = (lat.parse::<f64>(), lon.parse::<f64>()) else {
                    return Err(DomainError::Validation(
                        "Latitude/longitude must be numbers".to_string(),
                    ));
                };
                SearchLocation::coordinates(lat, lon)?
            }
            _ => match non_blank(place) {
                Some(place) => SearchLocation::Place(place.to_string()),
                None => return Err(Self::missing_location()),
            },
        };

        Self::new(term, location)
    }

    /// Set the result count, clamped to `1..=MAX_LIMIT` (0 means default)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 {
            Self::DEFAULT_LIMIT
        } else {
            limit.min(Self::MAX_LIMIT)
        };
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn location(&self) -> &SearchLocation {
        &self.location
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn missing_location() -> DomainError {
        DomainError::Validation("Provide a location or enable geolocation".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> SearchLocation {
        SearchLocation::Place(s.to_string())
    }

    #[test]
    fn test_empty_term_rejected() {
        let err = SearchQuery::new("   ", place("Austin")).unwrap_err();
        assert_eq!(err.to_string(), "Search term is required");
    }

    #[test]
    fn test_blank_place_rejected() {
        let err = SearchQuery::new("tacos", place("  ")).unwrap_err();
        assert_eq!(err.to_string(), "Provide a location or enable geolocation");
    }

    #[test]
    fn test_limit_clamping() {
        let query = SearchQuery::new("tacos", place("Austin")).unwrap();
        assert_eq!(query.limit(), 8);
        assert_eq!(query.clone().with_limit(0).limit(), 8);
        assert_eq!(query.clone().with_limit(3).limit(), 3);
        assert_eq!(query.with_limit(99).limit(), 20);
    }

    #[test]
    fn test_parse_prefers_coordinates() {
        let query =
            SearchQuery::parse("sushi", Some("Portland"), Some("45.52"), Some("-122.68")).unwrap();
        assert_eq!(
            query.location(),
            &SearchLocation::Coordinates {
                latitude: 45.52,
                longitude: -122.68
            }
        );
    }

    #[test]
    fn test_parse_non_numeric_coordinates() {
        let err = SearchQuery::parse("sushi", None, Some("north"), Some("-122")).unwrap_err();
        assert_eq!(err.to_string(), "Latitude/longitude must be numbers");

        let err = SearchQuery::parse("sushi", None, Some("NaN"), Some("1")).unwrap_err();
        assert_eq!(err.to_string(), "Latitude/longitude must be numbers");
    }

    #[test]
    fn test_parse_falls_back_to_place() {
        let query = SearchQuery::parse("sushi", Some(" Portland "), Some("45.5"), None).unwrap();
        assert_eq!(query.location(), &place("Portland"));
    }

    #[test]
    fn test_parse_missing_location() {
        let err = SearchQuery::parse("sushi", None, None, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(place("Austin").to_string(), "Austin");
        let coords = SearchLocation::coordinates(30.26716, -97.74306).unwrap();
        assert_eq!(coords.to_string(), "30.2672, -97.7431");
    }
}
