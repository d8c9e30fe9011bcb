//! Logging infrastructure: structured room event logging.
//!
//! Provides [`JsonlRoomEventLogger`], a JSONL file writer that implements
//! the [`RoomEventLogger`](dishide_application::RoomEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoomEventLogger;
