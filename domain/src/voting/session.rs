//! Lock / resolution state machine
//!
//! [`VotingSession`] owns a room's [`PickStore`] together with the lock
//! flag and the last tiebreak result. Only two things are stored besides the
//! picks; every locked sub-state is re-derived by [`VotingSession::view`].
//!
//! # State Transitions
//!
//! ```text
//!            finalize_voting()
//!   Open ─────────────────────────> Locked ─┬─ NoVotes
//!    ^                                      ├─ SingleWinner
//!    │  reset() / nominate()                ├─ TiedUnresolved ──spin()──┐
//!    └──────────────────────────────────────┤                           v
//!                                           └─ TiedResolved <──spin()───┘
//! ```
//!
//! Votes are only accepted while `Open`.

use super::resolver::{LeaderSet, LeaderSignature};
use super::tiebreak::Tiebreaker;
use crate::core::error::DomainError;
use crate::picks::{Pick, PickId, PickStore};
use crate::search::Business;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Whether voting is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    #[default]
    Open,
    Locked,
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockState::Open => write!(f, "open"),
            LockState::Locked => write!(f, "locked"),
        }
    }
}

/// What locking the vote produced; exactly one per successful lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LockOutcome {
    /// Nobody voted
    NoVotes,
    /// One outright leader
    Winner { id: PickId },
    /// Several leaders; a tiebreak is required
    Tie { ids: Vec<PickId> },
}

/// Result of a vote attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote counted; carries the pick's new total
    Counted { votes: u32 },
    /// Rejected because voting is locked
    Locked,
    /// Rejected because no pick has that id
    UnknownPick,
}

impl VoteOutcome {
    pub fn is_counted(&self) -> bool {
        matches!(self, VoteOutcome::Counted { .. })
    }
}

/// Derived view of the session
///
/// Never stored; computed from the lock flag, the picks and the tiebreak
/// record on every call.
#[derive(Debug, Clone, PartialEq)]
pub enum VotingView<'a> {
    Open,
    LockedNoVotes,
    LockedSingleWinner {
        winner: &'a Pick,
    },
    LockedTiedUnresolved {
        leaders: Vec<&'a Pick>,
    },
    LockedTiedResolved {
        leaders: Vec<&'a Pick>,
        winner: &'a Pick,
    },
}

impl VotingView<'_> {
    pub fn is_locked(&self) -> bool {
        !matches!(self, VotingView::Open)
    }

    /// Short machine-friendly name, e.g. for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            VotingView::Open => "open",
            VotingView::LockedNoVotes => "locked_no_votes",
            VotingView::LockedSingleWinner { .. } => "locked_single_winner",
            VotingView::LockedTiedUnresolved { .. } => "locked_tied_unresolved",
            VotingView::LockedTiedResolved { .. } => "locked_tied_resolved",
        }
    }
}

/// Tiebreak result, valid only for the leader set it was drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
struct TieResolution {
    signature: LeaderSignature,
    winner: PickId,
}

/// Voting state for one room
#[derive(Debug, Clone, Default)]
pub struct VotingSession {
    store: PickStore,
    lock: LockState,
    resolution: Option<TieResolution>,
}

impl VotingSession {
    /// Empty, open session
    pub fn new() -> Self {
        Self::default()
    }

    /// Open session over previously stored picks
    pub fn with_store(store: PickStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    // ==================== Pick Store operations ====================

    /// Nominate `business` with an optional note
    ///
    /// On success voting reopens and any tiebreak is discarded. A rejected
    /// nomination (duplicate business or pick id) leaves the whole session
    /// untouched.
    pub fn nominate(
        &mut self,
        id: PickId,
        business: Business,
        note: &str,
    ) -> Result<&Pick, DomainError> {
        let pick = self.store.nominate(id, business, note)?;
        self.lock = LockState::Open;
        self.resolution = None;
        Ok(pick)
    }

    /// Cast one vote for `id`
    ///
    /// Rejected while locked. A rejected attempt has no side effects; a
    /// counted vote discards any stale tiebreak.
    pub fn vote(&mut self, id: &PickId) -> VoteOutcome {
        if self.lock == LockState::Locked {
            return VoteOutcome::Locked;
        }

        match self.store.increment(id) {
            Some(votes) => {
                self.resolution = None;
                VoteOutcome::Counted { votes }
            }
            None => VoteOutcome::UnknownPick,
        }
    }

    /// Clear every pick and reopen voting; returns `false` on an empty room
    pub fn reset(&mut self) -> bool {
        if self.store.is_empty() {
            return false;
        }

        self.store.clear();
        self.lock = LockState::Open;
        self.resolution = None;
        true
    }

    /// Display order of the picks
    pub fn ordered(&self) -> Vec<&Pick> {
        self.store.ordered()
    }

    // ==================== Lock / resolution ====================

    /// Lock voting and report the outcome
    ///
    /// Returns `None` (and changes nothing) when already locked or when
    /// there is nothing to vote on.
    pub fn finalize_voting(&mut self) -> Option<LockOutcome> {
        if self.lock == LockState::Locked || self.store.is_empty() {
            return None;
        }

        self.lock = LockState::Locked;
        self.resolution = None;

        let leaders = self.leaders();
        let outcome = if leaders.is_empty() {
            LockOutcome::NoVotes
        } else if let Some(id) = leaders.sole_leader() {
            LockOutcome::Winner { id: id.clone() }
        } else {
            LockOutcome::Tie {
                ids: leaders.ids().to_vec(),
            }
        };
        Some(outcome)
    }

    /// Break the current tie at random
    ///
    /// Only valid while locked with more than one leader. Spinning again
    /// over the same tie simply replaces the previous winner.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PickId, DomainError> {
        if self.lock != LockState::Locked {
            return Err(DomainError::InvalidUsage(
                "cannot spin while voting is open".to_string(),
            ));
        }

        let leaders = self.leaders();
        let winner = Tiebreaker::resolve(leaders.ids(), rng)?;
        self.resolution = Some(TieResolution {
            signature: leaders.signature(),
            winner: winner.clone(),
        });
        Ok(winner)
    }

    /// Current leader set
    pub fn leaders(&self) -> LeaderSet {
        LeaderSet::from_picks(self.store.as_slice())
    }

    /// Project the stored flags onto one of the five observable states
    pub fn view(&self) -> VotingView<'_> {
        if self.lock == LockState::Open {
            return VotingView::Open;
        }

        let leaders = self.leaders();
        if leaders.is_empty() {
            return VotingView::LockedNoVotes;
        }

        let leader_picks: Vec<&Pick> = leaders
            .ids()
            .iter()
            .filter_map(|id| self.store.get(id))
            .collect();

        if !leaders.is_tie() {
            return match leader_picks.first() {
                Some(winner) => VotingView::LockedSingleWinner { winner },
                None => VotingView::LockedNoVotes,
            };
        }

        match self.resolved_winner(&leaders) {
            Some(winner) => VotingView::LockedTiedResolved {
                leaders: leader_picks,
                winner,
            },
            None => VotingView::LockedTiedUnresolved {
                leaders: leader_picks,
            },
        }
    }

    /// The winner, whenever one exists
    ///
    /// Some while locked with an outright leader, or with a tie whose
    /// tiebreak matches the current leaders. Independent of how or when the
    /// result is announced.
    pub fn current_winner(&self) -> Option<&Pick> {
        match self.view() {
            VotingView::LockedSingleWinner { winner }
            | VotingView::LockedTiedResolved { winner, .. } => Some(winner),
            _ => None,
        }
    }

    fn resolved_winner(&self, leaders: &LeaderSet) -> Option<&Pick> {
        let resolution = self.resolution.as_ref()?;
        if resolution.signature != leaders.signature() {
            return None;
        }
        self.store.get(&resolution.winner)
    }

    // ==================== Accessors ====================

    pub fn store(&self) -> &PickStore {
        &self.store
    }

    pub fn picks(&self) -> &[Pick] {
        self.store.as_slice()
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    /// Id drawn by the last spin, if it still applies to the current tie
    pub fn resolved_winner_id(&self) -> Option<&PickId> {
        let leaders = self.leaders();
        self.resolved_winner(&leaders).map(|p| &p.id)
    }
}
