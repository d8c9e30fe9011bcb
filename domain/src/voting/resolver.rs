//! Leader computation
//!
//! A pure function of the current picks. Zero votes never count as a lead,
//! so a room where nobody has voted has no leaders at all.

use crate::picks::{Pick, PickId};
use serde::{Deserialize, Serialize};

/// Picks holding the current maximum vote count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderSet {
    max_votes: u32,
    /// Leader ids in store insertion order
    leader_ids: Vec<PickId>,
}

/// Identity of a leader set, used to notice when a tie has changed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderSignature(String);

impl LeaderSet {
    /// Compute leaders from `picks`
    pub fn from_picks(picks: &[Pick]) -> Self {
        let max_votes = picks.iter().map(|p| p.votes).max().unwrap_or(0);
        if max_votes == 0 {
            return Self::default();
        }

        let leader_ids = picks
            .iter()
            .filter(|p| p.votes == max_votes)
            .map(|p| p.id.clone())
            .collect();

        Self {
            max_votes,
            leader_ids,
        }
    }

    pub fn max_votes(&self) -> u32 {
        self.max_votes
    }

    pub fn ids(&self) -> &[PickId] {
        &self.leader_ids
    }

    pub fn len(&self) -> usize {
        self.leader_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leader_ids.is_empty()
    }

    /// More than one leader
    pub fn is_tie(&self) -> bool {
        self.leader_ids.len() > 1
    }

    /// The single outright leader, if there is exactly one
    pub fn sole_leader(&self) -> Option<&PickId> {
        match self.leader_ids.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn contains(&self, id: &PickId) -> bool {
        self.leader_ids.contains(id)
    }

    /// Order-independent identity of this set and its vote count
    pub fn signature(&self) -> LeaderSignature {
        let mut ids: Vec<&str> = self.leader_ids.iter().map(PickId::as_str).collect();
        ids.sort_unstable();
        LeaderSignature(format!("{}|{}", self.max_votes, ids.join("|")))
    }
}

/// Convenience wrapper for [`LeaderSet::from_picks`]
pub fn leaders(picks: &[Pick]) -> LeaderSet {
    LeaderSet::from_picks(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Business;

    fn pick(id: &str, votes: u32) -> Pick {
        let mut pick = Pick::nominate(PickId::new(id), Business::new(id, id.to_uppercase()), "");
        pick.votes = votes;
        pick
    }

    #[test]
    fn test_empty_store_has_no_leaders() {
        let set = leaders(&[]);
        assert_eq!(set.max_votes(), 0);
        assert!(set.is_empty());
        assert!(!set.is_tie());
    }

    #[test]
    fn test_zero_votes_have_no_leaders() {
        let set = leaders(&[pick("a", 0), pick("b", 0), pick("c", 0)]);
        assert!(set.is_empty());
        assert_eq!(set.sole_leader(), None);
    }

    #[test]
    fn test_single_leader() {
        let set = leaders(&[pick("a", 1), pick("b", 3), pick("c", 2)]);
        assert_eq!(set.max_votes(), 3);
        assert_eq!(set.sole_leader(), Some(&PickId::new("b")));
        assert!(!set.is_tie());
    }

    #[test]
    fn test_tie_detected() {
        let set = leaders(&[pick("a", 2), pick("b", 1), pick("c", 2)]);
        assert!(set.is_tie());
        assert_eq!(set.ids(), &[PickId::new("a"), PickId::new("c")]);
        assert!(set.contains(&PickId::new("c")));
        assert!(!set.contains(&PickId::new("b")));
    }

    #[test]
    fn test_signature_ignores_order_but_not_votes() {
        let ab = leaders(&[pick("a", 2), pick("b", 2)]);
        let ba = leaders(&[pick("b", 2), pick("a", 2)]);
        let ab3 = leaders(&[pick("a", 3), pick("b", 3)]);

        assert_eq!(ab.signature(), ba.signature());
        assert_ne!(ab.signature(), ab3.signature());
    }
}
