//! Spinner status for directory searches

use colored::Colorize;
use dishide_application::StatusNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a search is in flight
///
/// The first status line starts the spinner; each later line replaces the
/// spinner with that line. Errors abandon the spinner.
pub struct SpinnerStatus {
    spinner: Mutex<Option<ProgressBar>>,
    hidden: bool,
}

impl SpinnerStatus {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            hidden: false,
        }
    }

    /// Spinner that never draws; the final line is printed plainly
    ///
    /// Used when stderr is not a terminal.
    pub fn hidden() -> Self {
        Self {
            spinner: Mutex::new(None),
            hidden: true,
        }
    }

    pub(crate) fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: &str) -> ProgressBar {
        let pb = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    #[cfg(test)]
    fn is_spinning(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl Default for SpinnerStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusNotifier for SpinnerStatus {
    fn on_status(&self, message: &str) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        match spinner.take() {
            Some(pb) if self.hidden => {
                pb.finish_and_clear();
                println!("{} {}", "->".green(), message);
            }
            Some(pb) => pb.finish_with_message(format!("{}", message.green())),
            None => *spinner = Some(self.start(message)),
        }
    }

    fn on_error(&self, message: &str) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        match spinner.take() {
            Some(pb) if !self.hidden => pb.abandon_with_message(format!("{}", message.red())),
            Some(pb) => {
                pb.finish_and_clear();
                eprintln!("{} {}", "!!".red().bold(), message.red());
            }
            None => eprintln!("{} {}", "!!".red().bold(), message.red()),
        }
    }
}

impl Drop for SpinnerStatus {
    fn drop(&mut self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}
