//! Room identifier value object

use serde::{Deserialize, Serialize};

/// Identifier of a room (Value Object)
///
/// A room scopes a pick list on this machine. It does not imply any
/// synchronization between participants. Characters outside
/// `[A-Za-z0-9_-]` are replaced with `-` so the id can be used as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Room used when none is supplied
    pub const DEFAULT: &'static str = "demo";

    /// Create a room id, falling back to [`RoomId::DEFAULT`] when blank
    pub fn new(raw: impl AsRef<str>) -> Self {
        let sanitized: String = raw
            .as_ref()
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();

        if sanitized.is_empty() {
            Self::default()
        } else {
            Self(sanitized)
        }
    }

    /// Resolve from an optional value (e.g. `--room` flag)
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
