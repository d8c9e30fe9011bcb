//! Directory record returned by a search

use serde::{Deserialize, Serialize};

/// A restaurant as returned by the search collaborator
///
/// Optional upstream fields stay `None` rather than being filled with
/// placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Upstream record id; at most one pick per id in a room
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub address: String,
}

impl Business {
    /// Create a record with only the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating: None,
            price: None,
            categories: Vec::new(),
            image_url: None,
            url: String::new(),
            address: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Comma-joined category titles, e.g. "Pizza, Italian"
    pub fn category_line(&self) -> String {
        self.categories.join(", ")
    }
}
