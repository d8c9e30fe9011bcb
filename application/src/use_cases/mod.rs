//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod room_session;
pub mod search_restaurants;
