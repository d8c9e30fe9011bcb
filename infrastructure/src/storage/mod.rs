//! Pick persistence adapters
//!
//! Provides [`JsonPickRepository`], one JSON file per room, implementing the
//! [`PickRepository`](dishide_application::PickRepository) port.

mod json_repository;

pub use json_repository::JsonPickRepository;
