//! Pick entity and its value objects

use crate::core::string::truncate_chars;
use crate::search::Business;
use serde::{Deserialize, Serialize};

/// Maximum note length, in characters
pub const NOTE_MAX_LENGTH: usize = 80;

/// Stable identifier of a pick within a room
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickId(String);

impl PickId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for a freshly nominated business: `<business id>-<unix millis>`
    pub fn for_source(business_id: &str, unix_millis: i64) -> Self {
        Self(format!("{}-{}", business_id, unix_millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PickId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A short free-text note attached to a pick
///
/// Always trimmed and at most [`NOTE_MAX_LENGTH`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn sanitize(raw: &str) -> Self {
        Self(truncate_chars(raw.trim(), NOTE_MAX_LENGTH))
    }

    /// Sanitize an untyped value; anything but a string becomes empty
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(serde_json::Value::as_str)
            .map(Self::sanitize)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A nominated candidate eligible for voting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub id: PickId,
    pub name: String,
    #[serde(default)]
    pub note: Note,
    #[serde(default)]
    pub votes: u32,
    /// The directory record this pick was nominated from
    #[serde(default, alias = "yelp", skip_serializing_if = "Option::is_none")]
    pub source: Option<Business>,
}

impl Pick {
    /// Nominate a business with zero votes
    pub fn nominate(id: PickId, business: Business, note: &str) -> Self {
        Self {
            id,
            name: business.name.trim().to_string(),
            note: Note::sanitize(note),
            votes: 0,
            source: Some(business),
        }
    }

    /// Upstream business id, if the pick came from a search
    pub fn source_id(&self) -> Option<&str> {
        self.source.as_ref().map(|b| b.id.as_str())
    }

    /// Rebuild a pick from an untrusted stored record
    ///
    /// The name is the first non-blank of `name`, `source.name` (or the
    /// legacy `yelp.name`), and `label`; records without one are dropped.
    /// Votes that are not a non-negative integer become 0. A missing id is
    /// replaced with `fallback_id`.
    pub fn from_stored(
        value: &serde_json::Value,
        fallback_id: impl FnOnce() -> PickId,
    ) -> Option<Self> {
        let record = value.as_object()?;

        let source_value = record.get("source").or_else(|| record.get("yelp"));
        let name = crate::core::string::first_non_blank([
            record.get("name").and_then(|v| v.as_str()),
            source_value
                .and_then(|s| s.get("name"))
                .and_then(|v| v.as_str()),
            record.get("label").and_then(|v| v.as_str()),
        ])?
        .to_string();

        let votes = record
            .get("votes")
            .and_then(serde_json::Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);

        let id = record
            .get("id")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PickId::new)
            .unwrap_or_else(fallback_id);

        let source = source_value.and_then(|s| serde_json::from_value::<Business>(s.clone()).ok());

        Some(Self {
            id,
            name,
            note: Note::from_value(record.get("note")),
            votes,
            source,
        })
    }
}
