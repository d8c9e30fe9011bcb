//! Ordered pick collection for a room

use super::entities::{Pick, PickId};
use crate::core::error::DomainError;
use crate::search::Business;
use std::collections::HashSet;

/// Ordered collection of picks
///
/// Insertion order is what gets persisted; it carries no voting meaning.
/// Display order comes from [`PickStore::ordered`].
///
/// Invariants: pick ids are unique, and at most one pick references a
/// given business id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickStore {
    picks: Vec<Pick>,
}

impl PickStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from untrusted stored data
    ///
    /// Anything other than a JSON array yields an empty store. Records that
    /// fail [`Pick::from_stored`] are skipped, as are later records that
    /// repeat an id or a business. Records without an id get one that no
    /// stored record uses.
    pub fn restore(value: &serde_json::Value) -> Self {
        let Some(records) = value.as_array() else {
            return Self::default();
        };

        let stored_ids: HashSet<&str> = records
            .iter()
            .filter_map(|r| r.get("id")?.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut store = Self::default();
        let mut seen_ids = HashSet::new();
        let mut seen_sources = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            let fallback_id = || {
                let base = format!("restored-{}", index);
                let mut candidate = base.clone();
                let mut attempt = 0;
                while stored_ids.contains(candidate.as_str()) {
                    attempt += 1;
                    candidate = format!("{}-{}", base, attempt);
                }
                PickId::new(candidate)
            };
            let Some(pick) = Pick::from_stored(record, fallback_id) else {
                continue;
            };

            if !seen_ids.insert(pick.id.clone()) {
                continue;
            }
            if let Some(source_id) = pick.source_id()
                && !seen_sources.insert(source_id.to_string())
            {
                continue;
            }

            store.picks.push(pick);
        }

        store
    }

    /// Append a new pick for `business` with zero votes
    ///
    /// Fails with [`DomainError::DuplicateCandidate`] if the business is
    /// already nominated; the store is unchanged in that case.
    pub fn nominate(
        &mut self,
        id: PickId,
        business: Business,
        note: &str,
    ) -> Result<&Pick, DomainError> {
        if self.contains_source(&business.id) {
            return Err(DomainError::DuplicateCandidate {
                name: business.name,
            });
        }
        if self.get(&id).is_some() {
            return Err(DomainError::InvalidUsage(format!(
                "pick id {} is already in use",
                id
            )));
        }

        let index = self.picks.len();
        self.picks.push(Pick::nominate(id, business, note));
        Ok(&self.picks[index])
    }

    /// Add exactly one vote to `id`; returns the new count
    pub fn increment(&mut self, id: &PickId) -> Option<u32> {
        let pick = self.picks.iter_mut().find(|p| &p.id == id)?;
        pick.votes = pick.votes.saturating_add(1);
        Some(pick.votes)
    }

    /// Remove every pick
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Display order: votes descending, then name ascending (case-sensitive)
    pub fn ordered(&self) -> Vec<&Pick> {
        let mut ordered: Vec<&Pick> = self.picks.iter().collect();
        ordered.sort_by(|a, b| b.votes.cmp(&a.votes).then_with(|| a.name.cmp(&b.name)));
        ordered
    }

    pub fn get(&self, id: &PickId) -> Option<&Pick> {
        self.picks.iter().find(|p| &p.id == id)
    }

    /// Whether a pick already references this business id
    pub fn contains_source(&self, business_id: &str) -> bool {
        self.picks.iter().any(|p| p.source_id() == Some(business_id))
    }

    /// Picks in insertion order
    pub fn as_slice(&self) -> &[Pick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn total_votes(&self) -> u64 {
        self.picks.iter().map(|p| u64::from(p.votes)).sum()
    }
}
