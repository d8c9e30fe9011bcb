//! Infrastructure layer for dishide
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Yelp search gateway, JSON room storage,
//! the JSONL room event log, and configuration file loading.

pub mod config;
pub mod logging;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnnounceConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileRoomConfig, FileSearchConfig,
};
pub use logging::JsonlRoomEventLogger;
pub use search::{UnavailableSearchGateway, YelpSearchGateway};
pub use storage::JsonPickRepository;
