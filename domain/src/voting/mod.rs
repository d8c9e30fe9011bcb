//! Voting domain
//!
//! # Core Concepts
//!
//! ## Leaders
//! The picks holding the maximum vote count, provided that count is above
//! zero. More than one leader is a tie.
//!
//! ## Lock
//! Locking freezes voting and reports one of three outcomes: no votes, an
//! outright winner, or a tie.
//!
//! ## Tiebreak
//! A uniform random draw among tied leaders. The result is tied to the
//! leader set it was drawn from and is ignored once that set changes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  VotingSession                                           │
//! │  ┌────────────┐   ┌──────────────┐   ┌────────────────┐  │
//! │  │ PickStore  │──>│ LeaderSet    │──>│ Tiebreaker     │  │
//! │  │ (picks)    │   │ (resolver)   │   │ (random draw)  │  │
//! │  └────────────┘   └──────────────┘   └────────────────┘  │
//! │         lock flag + tie resolution ──> view()            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod resolver;
pub mod session;
pub mod tiebreak;

pub use resolver::{LeaderSet, LeaderSignature, leaders};
pub use session::{LockOutcome, LockState, VoteOutcome, VotingSession, VotingView};
pub use tiebreak::Tiebreaker;
