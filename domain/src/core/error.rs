//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected before any state change or external call
    #[error("{0}")]
    Validation(String),

    /// The external record is already nominated in this room
    #[error("That restaurant is already in this room")]
    DuplicateCandidate { name: String },

    /// A caller broke an operation's precondition (e.g. spinning without a tie)
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
}
