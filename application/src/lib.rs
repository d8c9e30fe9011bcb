//! Application layer for dishide
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    pick_repository::{PickRepository, RepositoryError},
    room_event_logger::{NoRoomEventLogger, RoomEvent, RoomEventLogger},
    search_gateway::{SearchError, SearchGateway},
    status::{NoStatus, StatusNotifier},
};
pub use use_cases::room_session::RoomSessionUseCase;
pub use use_cases::search_restaurants::{SearchRestaurantsInput, SearchRestaurantsUseCase};
