//! Announcement sequencer
//!
//! Each sequence runs under a [`CancellationToken`] handed out by
//! [`AnnouncementSequencer::begin`]. Starting a new sequence, calling
//! [`AnnouncementSequencer::cancel`] (reset, leader change, Ctrl-C) or
//! dropping the sequencer cancels the one in flight.

use crate::config::AnnounceTiming;
use crate::progress::reporter::SpinnerStatus;
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Interval between names while the wheel spins
const NAME_TICK: Duration = Duration::from_millis(120);

/// How an announcement ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    Completed,
    Cancelled,
}

/// Plays announcements with the configured pacing
pub struct AnnouncementSequencer {
    timing: AnnounceTiming,
    token: CancellationToken,
    hidden: bool,
}

impl AnnouncementSequencer {
    pub fn new(timing: AnnounceTiming) -> Self {
        Self {
            timing,
            token: CancellationToken::new(),
            hidden: false,
        }
    }

    /// Keep the timers but draw nothing
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Cancel the sequence in flight and return a token for the next one
    pub fn begin(&mut self) -> CancellationToken {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.token.clone()
    }

    /// Cancel the sequence in flight, if any
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!("Cancelling announcement");
            self.token.cancel();
        }
    }

    /// Spin the wheel over `names`, land on `winner`, then celebrate
    pub async fn spin_wheel(
        &self,
        names: &[String],
        winner: &str,
        token: &CancellationToken,
    ) -> Announcement {
        if !self.timing.enabled {
            return Announcement::Completed;
        }

        let pb = self.spinner();
        let deadline = tokio::time::sleep(self.timing.spin);
        tokio::pin!(deadline);
        let mut ticker = tokio::time::interval(NAME_TICK);
        let mut index = 0usize;

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    pb.finish_and_clear();
                    return Announcement::Cancelled;
                }
                _ = &mut deadline => break,
                _ = ticker.tick() => {
                    if let Some(name) = names.get(index % names.len().max(1)) {
                        pb.set_message(format!("Spinning... {}", name.bold()));
                    }
                    index = index.wrapping_add(1);
                }
            }
        }

        pb.set_message(format!("{} {}", "The wheel has spoken:".magenta(), winner.bold()));
        let outcome = Self::hold(self.timing.celebration, token).await;
        pb.finish_and_clear();
        outcome
    }

    /// Banner for an outright winner after votes lock
    pub async fn announce_winner(&self, winner: &str, token: &CancellationToken) -> Announcement {
        if !self.timing.enabled {
            return Announcement::Completed;
        }

        let pb = self.spinner();
        pb.set_message(format!("{} takes the crown!", winner.green().bold()));
        let outcome = Self::hold(self.timing.winner, token).await;
        pb.finish_and_clear();
        outcome
    }

    async fn hold(duration: Duration, token: &CancellationToken) -> Announcement {
        tokio::select! {
            biased;
            _ = token.cancelled() => Announcement::Cancelled,
            _ = tokio::time::sleep(duration) => Announcement::Completed,
        }
    }

    fn spinner(&self) -> ProgressBar {
        let pb = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_style(SpinnerStatus::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

impl Drop for AnnouncementSequencer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
