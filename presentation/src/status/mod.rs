//! Status line output
//!
//! [`ConsoleStatus`] implements the
//! [`StatusNotifier`](dishide_application::StatusNotifier) port with plain
//! colored lines.

pub mod console;

pub use console::ConsoleStatus;
