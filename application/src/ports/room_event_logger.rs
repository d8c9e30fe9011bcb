//! Port for structured room event logging.
//!
//! Defines the [`RoomEventLogger`] trait for recording what happened in a
//! room (searches, nominations, votes, locks, spins, resets) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable history of the room (JSONL).

use dishide_domain::RoomId;
use serde_json::Value;

/// A structured room event for logging.
///
/// Each event has a type string, the room it happened in, and a JSON
/// payload containing event-specific fields.
pub struct RoomEvent {
    /// Event type identifier (e.g., "nominated", "vote_cast", "votes_locked").
    pub event_type: &'static str,
    /// Room the event belongs to.
    pub room: RoomId,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RoomEvent {
    pub fn new(event_type: &'static str, room: &RoomId, payload: Value) -> Self {
        Self {
            event_type,
            room: room.clone(),
            payload,
        }
    }
}

/// Port for logging room events to a structured log.
///
/// The `log` method is synchronous and non-fallible so that a logging
/// failure never interrupts a vote.
pub trait RoomEventLogger: Send + Sync {
    /// Record a room event.
    fn log(&self, event: RoomEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoRoomEventLogger;

impl RoomEventLogger for NoRoomEventLogger {
    fn log(&self, _event: RoomEvent) {}
}
