//! Pick persistence port
//!
//! Stores one ordered pick list per room. Loading hands back raw JSON on
//! purpose: the domain's [`PickStore::restore`](dishide_domain::PickStore::restore)
//! decides what survives, so a repository never has to trust its own files.

use dishide_domain::{Pick, RoomId};
use thiserror::Error;

/// Errors that can occur while reading or writing picks
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence for a room's picks
pub trait PickRepository: Send + Sync {
    /// Stored picks for `room`, or `Value::Null` when nothing usable is stored
    fn load(&self, room: &RoomId) -> Result<serde_json::Value, RepositoryError>;

    /// Replace the stored picks for `room`
    fn save(&self, room: &RoomId, picks: &[Pick]) -> Result<(), RepositoryError>;
}
