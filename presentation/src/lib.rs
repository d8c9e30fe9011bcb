//! Presentation layer for dishide
//!
//! This crate contains CLI definitions, output formatters, status and
//! progress display, timed announcements, and the interactive room REPL.

pub mod announce;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod room;
pub mod status;

// Re-export commonly used types
pub use announce::{Announcement, AnnouncementSequencer};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{AnnounceTiming, OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerStatus;
pub use room::RoomRepl;
pub use status::ConsoleStatus;
