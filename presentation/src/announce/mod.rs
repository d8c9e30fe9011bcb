//! Timed announcements: the tiebreak wheel and the winner banner
//!
//! Announcements are display only. The winner is already decided in the
//! session before any of them start, so cancelling one never changes the
//! result.

pub mod sequencer;

pub use sequencer::{Announcement, AnnouncementSequencer};
