//! Presentation-level configuration
//!
//! Configuration for output formatting, REPL behavior and announcement pacing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Search results listed before `/more`
    pub initial_results: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            initial_results: 4,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show spinners and animations
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// How long each announcement stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceTiming {
    /// Play animations at all; when false every announcement completes at once
    pub enabled: bool,
    /// Wheel spin before the tiebreak result is revealed
    pub spin: Duration,
    /// Celebration after a tiebreak result
    pub celebration: Duration,
    /// Banner after votes lock with an outright winner
    pub winner: Duration,
}

impl Default for AnnounceTiming {
    fn default() -> Self {
        Self {
            enabled: true,
            spin: Duration::from_millis(4200),
            celebration: Duration::from_millis(2600),
            winner: Duration::from_millis(3200),
        }
    }
}

impl AnnounceTiming {
    pub fn from_millis(enabled: bool, spin: u64, celebration: u64, winner: u64) -> Self {
        Self {
            enabled,
            spin: Duration::from_millis(spin),
            celebration: Duration::from_millis(celebration),
            winner: Duration::from_millis(winner),
        }
    }

    /// Timing with every animation skipped
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
