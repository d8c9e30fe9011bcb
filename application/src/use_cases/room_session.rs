//! Room Session use case
//!
//! Drives a room's [`VotingSession`]: restores it from the repository,
//! applies nominations, votes, locks, spins and resets, persists after every
//! change, and records each change in the room event log.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::pick_repository::PickRepository;
use crate::ports::room_event_logger::{NoRoomEventLogger, RoomEvent, RoomEventLogger};
use crate::ports::status::StatusNotifier;
use dishide_domain::{
    Business, DomainError, LockOutcome, Pick, PickId, PickStore, RoomId, VoteOutcome,
    VotingSession,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for one room's pick list and vote
pub struct RoomSessionUseCase<R: PickRepository + ?Sized> {
    room: RoomId,
    session: VotingSession,
    repository: Arc<R>,
    events: Arc<dyn RoomEventLogger>,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
}

impl<R: PickRepository + ?Sized> RoomSessionUseCase<R> {
    /// Open `room`, restoring whatever the repository holds
    ///
    /// Unreadable or malformed storage starts the room empty rather than
    /// failing.
    pub fn open(room: RoomId, repository: Arc<R>) -> Self {
        let stored = match repository.load(&room) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not load picks for room {}: {}", room, e);
                serde_json::Value::Null
            }
        };

        let store = PickStore::restore(&stored);
        info!("Opened room {} with {} picks", room, store.len());

        Self {
            room,
            session: VotingSession::with_store(store),
            repository,
            events: Arc::new(NoRoomEventLogger),
            clock: Arc::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn RoomEventLogger>) -> Self {
        self.events = events;
        self.log(
            "room_restored",
            serde_json::json!({ "picks": self.session.picks().len() }),
        );
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the tiebreak random source (seeded sources make spins repeatable)
    pub fn with_rng(mut self, rng: Box<dyn RngCore + Send>) -> Self {
        self.rng = rng;
        self
    }

    // ==================== Accessors ====================

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn session(&self) -> &VotingSession {
        &self.session
    }

    /// Pick at a 1-based position in display order
    pub fn pick_at(&self, position: usize) -> Option<&Pick> {
        position
            .checked_sub(1)
            .and_then(|index| self.session.ordered().get(index).copied())
    }

    // ==================== Operations ====================

    /// Nominate a search result
    pub fn nominate(
        &mut self,
        business: Business,
        note: &str,
        status: &dyn StatusNotifier,
    ) -> Result<PickId, DomainError> {
        let id = PickId::for_source(&business.id, self.clock.now_millis());
        let business_id = business.id.clone();

        let pick = match self.session.nominate(id, business, note) {
            Ok(pick) => pick.clone(),
            Err(e) => {
                debug!("Nomination rejected in room {}: {}", self.room, e);
                status.on_error(&e.to_string());
                return Err(e);
            }
        };

        info!("Nominated {} in room {}", pick.name, self.room);
        status.on_status(&format!(
            "{} crashed the party in room {}",
            pick.name, self.room
        ));
        self.log(
            "nominated",
            serde_json::json!({
                "pick_id": pick.id,
                "name": pick.name,
                "note": pick.note,
                "business_id": business_id,
            }),
        );
        self.persist(status);
        Ok(pick.id)
    }

    /// Cast one vote
    pub fn vote(&mut self, id: &PickId, status: &dyn StatusNotifier) -> VoteOutcome {
        let outcome = self.session.vote(id);
        match outcome {
            VoteOutcome::Counted { votes } => {
                debug!("Vote for {} in room {} (now {})", id, self.room, votes);
                self.log(
                    "vote_cast",
                    serde_json::json!({ "pick_id": id, "votes": votes }),
                );
                self.persist(status);
            }
            VoteOutcome::Locked => {
                status.on_error("Votes are locked. Reset the room to vote again.");
            }
            VoteOutcome::UnknownPick => {
                status.on_error(&format!("No pick with id {}", id));
            }
        }
        outcome
    }

    /// Lock voting and announce the outcome
    pub fn lock(&mut self, status: &dyn StatusNotifier) -> Option<LockOutcome> {
        let outcome = self.session.finalize_voting()?;

        match &outcome {
            LockOutcome::NoVotes => {
                status.on_status("Votes locked, but no votes were cast yet.");
            }
            LockOutcome::Winner { id } => {
                let name = self.name_of(id);
                status.on_status(&format!("{} takes the crown!", name));
            }
            LockOutcome::Tie { .. } => {
                status.on_status("Votes locked. Time for a tie breaker!");
            }
        }

        info!("Votes locked in room {}: {:?}", self.room, outcome);
        self.log("votes_locked", serde_json::to_value(&outcome).unwrap_or_default());
        Some(outcome)
    }

    /// Spin the tiebreaker wheel
    ///
    /// The winner is settled here; announcing it is up to the caller.
    pub fn spin(&mut self) -> Result<PickId, DomainError> {
        let leaders = self.session.leaders();
        let winner = self.session.spin(&mut self.rng)?;

        info!("Tie in room {} resolved: {}", self.room, winner);
        self.log(
            "tie_resolved",
            serde_json::json!({
                "leaders": leaders.ids(),
                "votes": leaders.max_votes(),
                "winner": winner,
            }),
        );
        Ok(winner)
    }

    /// Clear every pick; returns `false` when there was nothing to clear
    pub fn reset(&mut self, status: &dyn StatusNotifier) -> bool {
        let cleared = self.session.picks().len();
        if !self.session.reset() {
            return false;
        }

        info!("Room {} reset ({} picks cleared)", self.room, cleared);
        status.on_status("Pick list cleared. Add fresh contenders!");
        self.log("picks_reset", serde_json::json!({ "cleared": cleared }));
        self.persist(status);
        true
    }

    // ==================== Helpers ====================

    fn name_of(&self, id: &PickId) -> String {
        self.session
            .store()
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn persist(&self, status: &dyn StatusNotifier) {
        if let Err(e) = self.repository.save(&self.room, self.session.picks()) {
            warn!("Could not save picks for room {}: {}", self.room, e);
            status.on_error(&format!("Could not save picks: {}", e));
        }
    }

    fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.events
            .log(RoomEvent::new(event_type, &self.room, payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::ports::pick_repository::RepositoryError;
    use crate::ports::status::NoStatus;
    use dishide_domain::{LockState, VotingView};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepository {
        rooms: Mutex<HashMap<String, serde_json::Value>>,
        fail_saves: bool,
    }

    impl PickRepository for MemoryRepository {
        fn load(&self, room: &RoomId) -> Result<serde_json::Value, RepositoryError> {
            Ok(self
                .rooms
                .lock()
                .unwrap()
                .get(room.as_str())
                .cloned()
                .unwrap_or_default())
        }

        fn save(&self, room: &RoomId, picks: &[Pick]) -> Result<(), RepositoryError> {
            if self.fail_saves {
                return Err(RepositoryError::Io(std::io::Error::other("disk full")));
            }
            self.rooms
                .lock()
                .unwrap()
                .insert(room.as_str().to_string(), serde_json::to_value(picks)?);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingEvents(Mutex<Vec<&'static str>>);

    impl RoomEventLogger for RecordingEvents {
        fn log(&self, event: RoomEvent) {
            self.0.lock().unwrap().push(event.event_type);
        }
    }

    #[derive(Default)]
    struct RecordingStatus {
        statuses: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl StatusNotifier for RecordingStatus {
        fn on_status(&self, message: &str) {
            self.statuses.lock().unwrap().push(message.to_string());
        }
        fn on_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn open(repository: Arc<MemoryRepository>) -> RoomSessionUseCase<MemoryRepository> {
        RoomSessionUseCase::open(RoomId::new("lunch"), repository)
            .with_clock(Arc::new(FixedClock(1_700_000_000_000)))
            .with_rng(Box::new(StdRng::seed_from_u64(5)))
    }

    fn business(id: &str, name: &str) -> Business {
        Business::new(id, name)
    }

    #[test]
    fn test_nominate_generates_id_and_persists() {
        let repository = Arc::new(MemoryRepository::default());
        let mut room = open(repository.clone());
        let status = RecordingStatus::default();

        let id = room
            .nominate(business("joes", "Joe's Pizza"), "  thin crust ", &status)
            .unwrap();

        assert_eq!(id.as_str(), "joes-1700000000000");
        assert_eq!(
            status.statuses.lock().unwrap()[0],
            "Joe's Pizza crashed the party in room lunch"
        );

        let reopened = open(repository);
        assert_eq!(reopened.session().picks().len(), 1);
        assert_eq!(reopened.session().picks()[0].note.as_str(), "thin crust");
    }

    #[test]
    fn test_duplicate_nomination_reports_error() {
        let mut room = open(Arc::new(MemoryRepository::default()));
        let status = RecordingStatus::default();
        room.nominate(business("joes", "Joe's"), "", &status).unwrap();

        let err = room
            .nominate(business("joes", "Joe's"), "", &status)
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateCandidate { .. }));
        assert_eq!(
            status.errors.lock().unwrap()[0],
            "That restaurant is already in this room"
        );
        assert_eq!(room.session().picks().len(), 1);
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let repository = Arc::new(MemoryRepository::default());
        repository
            .rooms
            .lock()
            .unwrap()
            .insert("lunch".into(), serde_json::json!({"not": "a list"}));

        let room = open(repository);
        assert!(room.session().store().is_empty());
    }

    #[test]
    fn test_lock_messages() {
        let mut room = open(Arc::new(MemoryRepository::default()));
        let status = RecordingStatus::default();
        let a = room.nominate(business("a", "Arepa"), "", &NoStatus).unwrap();
        room.nominate(business("b", "Bibimbap"), "", &NoStatus).unwrap();
        room.vote(&a, &NoStatus);

        assert_eq!(room.lock(&status), Some(LockOutcome::Winner { id: a }));
        assert_eq!(status.statuses.lock().unwrap()[0], "Arepa takes the crown!");
        assert_eq!(room.lock(&status), None);
    }

    #[test]
    fn test_vote_while_locked_reports_error() {
        let mut room = open(Arc::new(MemoryRepository::default()));
        let status = RecordingStatus::default();
        let a = room.nominate(business("a", "A"), "", &NoStatus).unwrap();
        room.lock(&NoStatus);

        assert_eq!(room.vote(&a, &status), VoteOutcome::Locked);
        assert_eq!(status.errors.lock().unwrap().len(), 1);
        assert_eq!(room.session().store().total_votes(), 0);
    }

    #[test]
    fn test_tie_spin_and_reset_flow() {
        let events = Arc::new(RecordingEvents::default());
        let mut room = open(Arc::new(MemoryRepository::default())).with_events(events.clone());
        let a = room.nominate(business("a", "A"), "", &NoStatus).unwrap();
        let b = room.nominate(business("b", "B"), "", &NoStatus).unwrap();
        for id in [&a, &b, &a, &b] {
            assert!(room.vote(id, &NoStatus).is_counted());
        }

        assert!(matches!(room.lock(&NoStatus), Some(LockOutcome::Tie { .. })));
        let winner = room.spin().unwrap();
        assert!(winner == a || winner == b);
        assert!(matches!(
            room.session().view(),
            VotingView::LockedTiedResolved { .. }
        ));

        let status = RecordingStatus::default();
        assert!(room.reset(&status));
        assert!(!room.reset(&status));
        assert_eq!(room.session().lock_state(), LockState::Open);
        assert_eq!(status.statuses.lock().unwrap().len(), 1);

        let logged = events.0.lock().unwrap().clone();
        assert_eq!(
            logged,
            vec![
                "room_restored",
                "nominated",
                "nominated",
                "vote_cast",
                "vote_cast",
                "vote_cast",
                "vote_cast",
                "votes_locked",
                "tie_resolved",
                "picks_reset",
            ]
        );
    }

    #[test]
    fn test_spin_without_tie_is_invalid_usage() {
        let mut room = open(Arc::new(MemoryRepository::default()));
        room.nominate(business("a", "A"), "", &NoStatus).unwrap();
        room.lock(&NoStatus);
        assert!(matches!(room.spin(), Err(DomainError::InvalidUsage(_))));
    }

    #[test]
    fn test_save_failure_keeps_in_memory_change() {
        let repository = Arc::new(MemoryRepository {
            fail_saves: true,
            ..Default::default()
        });
        let mut room = open(repository);
        let status = RecordingStatus::default();

        room.nominate(business("a", "A"), "", &status).unwrap();

        assert_eq!(room.session().picks().len(), 1);
        assert!(status.errors.lock().unwrap()[0].contains("disk full"));
    }

    #[test]
    fn test_pick_at_uses_display_order() {
        let mut room = open(Arc::new(MemoryRepository::default()));
        room.nominate(business("z", "Zaatar"), "", &NoStatus).unwrap();
        let b = room.nominate(business("b", "Banh Mi"), "", &NoStatus).unwrap();
        room.nominate(business("c", "Churros"), "", &NoStatus).unwrap();
        room.vote(&b, &NoStatus);

        assert_eq!(room.pick_at(1).map(|p| p.name.as_str()), Some("Banh Mi"));
        assert_eq!(room.pick_at(2).map(|p| p.name.as_str()), Some("Churros"));
        assert!(room.pick_at(0).is_none());
        assert!(room.pick_at(4).is_none());
    }
}
