//! Status notification port
//!
//! Defines the interface for the short, user-visible status lines that
//! room operations produce ("Feast alert: 8 spots ready", ...).

/// Callback for user-visible status updates
///
/// Implementations live in the presentation layer and can display
/// messages in various ways (console, status bar, etc.)
pub trait StatusNotifier: Send + Sync {
    /// Called with an informational message
    fn on_status(&self, message: &str);

    /// Called with a message describing a failure; prior state is intact
    fn on_error(&self, message: &str);
}

/// No-op notifier for when status output is not needed
pub struct NoStatus;

impl StatusNotifier for NoStatus {
    fn on_status(&self, _message: &str) {}
    fn on_error(&self, _message: &str) {}
}
