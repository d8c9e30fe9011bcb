//! Core domain concepts shared across all subdomains.
//!
//! - [`room::RoomId`]: the room a pick list belongs to
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-safe string helpers

pub mod error;
pub mod room;
pub mod string;
