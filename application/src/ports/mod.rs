//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod pick_repository;
pub mod room_event_logger;
pub mod search_gateway;
pub mod status;
