//! Domain layer for dishide
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Picks
//!
//! A room collects **picks**: restaurants nominated from a directory search,
//! each with an optional short note and a vote count.
//!
//! ## Voting
//!
//! - **Open**: anyone can vote, one increment per vote
//! - **Locked**: voting is frozen and the outcome is derived (no votes,
//!   an outright winner, or a tie)
//! - **Tiebreak**: a tie is settled by a uniform random spin

pub mod core;
pub mod picks;
pub mod search;
pub mod voting;

// Re-export commonly used types
pub use crate::core::{error::DomainError, room::RoomId};
pub use picks::{NOTE_MAX_LENGTH, Note, Pick, PickId, PickStore};
pub use search::{Business, SearchLocation, SearchQuery};
pub use voting::{
    LeaderSet, LeaderSignature, LockOutcome, LockState, Tiebreaker, VoteOutcome, VotingSession,
    VotingView,
};
