//! Plain console status lines

use colored::Colorize;
use dishide_application::StatusNotifier;

/// Prints status lines to stdout and errors to stderr
pub struct ConsoleStatus;

impl ConsoleStatus {
    fn status_line(message: &str) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    fn error_line(message: &str) -> String {
        format!("{} {}", "!!".red().bold(), message.red())
    }
}

impl StatusNotifier for ConsoleStatus {
    fn on_status(&self, message: &str) {
        println!("{}", Self::status_line(message));
    }

    fn on_error(&self, message: &str) {
        eprintln!("{}", Self::error_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_message_text() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleStatus::status_line("Feast alert: 3 spots ready"),
            "-> Feast alert: 3 spots ready"
        );
        assert_eq!(
            ConsoleStatus::error_line("Search term is required"),
            "!! Search term is required"
        );
    }
}
