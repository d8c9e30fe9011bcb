//! JSON file storage for room picks.
//!
//! Layout: `<root>/rooms/<room>.json`, each file holding the room's picks as
//! a JSON array in insertion order.

use dishide_application::{PickRepository, RepositoryError};
use dishide_domain::{Pick, RoomId};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// [`PickRepository`] that keeps one JSON file per room
pub struct JsonPickRepository {
    root: PathBuf,
}

impl JsonPickRepository {
    /// Store rooms under `<root>/rooms/`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// File backing `room`
    pub fn room_path(&self, room: &RoomId) -> PathBuf {
        self.root.join("rooms").join(format!("{}.json", room))
    }
}

impl PickRepository for JsonPickRepository {
    fn load(&self, room: &RoomId) -> Result<Value, RepositoryError> {
        let path = self.room_path(room);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Value::Null),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Ignoring unreadable room file {}: {}", path.display(), e);
                Ok(Value::Null)
            }
        }
    }

    fn save(&self, room: &RoomId, picks: &[Pick]) -> Result<(), RepositoryError> {
        let path = self.room_path(room);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(picks)?;

        // Write then rename so a crash never leaves a half-written room
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        debug!(room = %room, picks = picks.len(), "Saved room");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishide_domain::{Business, PickId, PickStore};

    fn pick(id: &str, name: &str, votes: u32) -> Pick {
        let mut pick = Pick::nominate(PickId::new(id), Business::new(id, name), "  bring cash ");
        pick.votes = votes;
        pick
    }

    #[test]
    fn test_load_missing_room_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonPickRepository::new(dir.path());
        assert_eq!(repo.load(&RoomId::new("nowhere")).unwrap(), Value::Null);
    }

    #[test]
    fn test_save_then_restore() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonPickRepository::new(dir.path());
        let room = RoomId::new("friday");

        repo.save(&room, &[pick("a", "Arepa", 2), pick("b", "Banh Mi", 0)])
            .unwrap();
        assert!(dir.path().join("rooms").join("friday.json").exists());

        let store = PickStore::restore(&repo.load(&room).unwrap());
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_votes(), 2);
        assert_eq!(store.as_slice()[0].note.as_str(), "bring cash");
    }

    #[test]
    fn test_unparsable_file_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonPickRepository::new(dir.path());
        let room = RoomId::new("broken");

        let path = repo.room_path(&room);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert_eq!(repo.load(&room).unwrap(), Value::Null);
    }

    #[test]
    fn test_reads_legacy_yelp_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonPickRepository::new(dir.path());
        let room = RoomId::new("legacy");

        let path = repo.room_path(&room);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[{"id":"x-1","votes":3,"yelp":{"id":"x","name":"Xi'an Noodles"}}]"#,
        )
        .unwrap();

        let store = PickStore::restore(&repo.load(&room).unwrap());
        assert_eq!(store.as_slice()[0].name, "Xi'an Noodles");
        assert!(store.contains_source("x"));
    }

    #[test]
    fn test_save_empty_room_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonPickRepository::new(dir.path());
        let room = RoomId::default();

        repo.save(&room, &[pick("a", "Arepa", 1)]).unwrap();
        repo.save(&room, &[]).unwrap();

        assert_eq!(repo.load(&room).unwrap(), serde_json::json!([]));
    }
}
