//! REPL (Read-Eval-Print Loop) for a room

use crate::announce::{Announcement, AnnouncementSequencer};
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SpinnerStatus;
use crate::room::command::{Command, VoteTarget};
use crate::status::ConsoleStatus;
use colored::Colorize;
use dishide_application::{
    PickRepository, RoomSessionUseCase, SearchGateway, SearchRestaurantsInput,
    SearchRestaurantsUseCase, StatusNotifier,
};
use dishide_domain::{Business, LockOutcome, PickId, VoteOutcome, VotingView};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::future::Future;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive REPL for one room
pub struct RoomRepl<G: SearchGateway + ?Sized, R: PickRepository + ?Sized> {
    room: RoomSessionUseCase<R>,
    search: SearchRestaurantsUseCase<G>,
    sequencer: AnnouncementSequencer,
    output: OutputConfig,
    config: ReplConfig,
    results: Vec<Business>,
    shown: usize,
    /// Location of the last successful search, reused when none is given
    last_location: SearchRestaurantsInput,
}

impl<G: SearchGateway + ?Sized, R: PickRepository + ?Sized> RoomRepl<G, R> {
    pub fn new(
        room: RoomSessionUseCase<R>,
        search: SearchRestaurantsUseCase<G>,
        sequencer: AnnouncementSequencer,
    ) -> Self {
        Self {
            room,
            search,
            sequencer,
            output: OutputConfig::default(),
            config: ReplConfig::default(),
            results: Vec::new(),
            shown: 0,
            last_location: SearchRestaurantsInput::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn room(&self) -> &RoomSessionUseCase<R> {
        &self.room
    }

    /// Results of the last search
    pub fn results(&self) -> &[Business] {
        &self.results
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.history_path() {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                warn!("Could not create history directory {}: {}", parent.display(), e);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open REPL history: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!("dishide:{}", self.room.room())),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match Command::parse(line) {
                        Ok(command) => {
                            if self.handle_command(command).await {
                                break;
                            }
                        }
                        Err(usage) => println!("{}", usage.yellow()),
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => continue,
            }
        }

        self.sequencer.cancel();
        Ok(())
    }

    fn history_path(&self) -> Option<PathBuf> {
        self.config.history_file.as_ref().map(PathBuf::from)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        dishide - where are we eating?       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Room: {}  ({} picks)",
            self.room.room().to_string().bold(),
            self.room.session().picks().len()
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  {}  - Search (plain text works too)", "/search <term> @ <place>".cyan());
        println!("  {}    - Search near coordinates", "/near <lat> <lon> <term>".cyan());
        println!("  {}                     - Show the rest of the results", "/more".cyan());
        println!("  {}            - Nominate result n", "/add <n> [note]".cyan());
        println!("  {}              - Vote for a pick", "/vote <n|id>".cyan());
        println!("  {}                    - Show the pick list", "/picks".cyan());
        println!("  {}                     - Lock the votes", "/lock".cyan());
        println!("  {}                     - Spin the wheel to break a tie", "/spin".cyan());
        println!("  {}                   - Show the winner", "/winner".cyan());
        println!("  {}                    - Clear the pick list", "/reset".cyan());
        println!("  {}                     - Show room info", "/room".cyan());
        println!("  {}                     - Exit", "/quit".cyan());
        println!();
    }

    /// Handle one command. Returns true if should exit.
    pub async fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Search { term, place } => {
                let input = match place {
                    Some(place) => SearchRestaurantsInput::near_place(term, place),
                    None => SearchRestaurantsInput {
                        term,
                        ..self.last_location.clone()
                    },
                };
                self.run_search(input).await;
            }
            Command::Near {
                latitude,
                longitude,
                term,
            } => {
                let input = SearchRestaurantsInput::near_coordinates(term, latitude, longitude);
                self.run_search(input).await;
            }
            Command::More => {
                if self.shown >= self.results.len() {
                    println!("{}", "Nothing more to show.".dimmed());
                } else {
                    self.shown = self.results.len();
                    self.print_results();
                }
            }
            Command::Add { position, note } => self.add(position, &note),
            Command::Vote(target) => self.vote(target),
            Command::Picks => self.print_picks(),
            Command::Lock => self.lock().await,
            Command::Spin => self.spin().await,
            Command::Winner => match self.room.session().current_winner() {
                Some(winner) => println!("{}", ConsoleFormatter::format_winner_banner(winner)),
                None => println!("{}", ConsoleFormatter::format_view(&self.room.session().view())),
            },
            Command::Reset => {
                self.sequencer.cancel();
                if !self.room.reset(&ConsoleStatus) {
                    println!("{}", "Nothing to reset.".dimmed());
                }
            }
            Command::Room => {
                let session = self.room.session();
                println!(
                    "Room {}: {} picks, {} votes, {}",
                    self.room.room().to_string().bold(),
                    session.picks().len(),
                    session.store().total_votes(),
                    session.view().as_str()
                );
            }
            Command::Help => {
                println!();
                Self::print_help();
            }
            Command::Quit => {
                println!("Bye!");
                return true;
            }
        }
        false
    }

    async fn run_search(&mut self, input: SearchRestaurantsInput) {
        let status: Box<dyn StatusNotifier> = if self.config.show_progress {
            Box::new(SpinnerStatus::new())
        } else {
            Box::new(ConsoleStatus)
        };

        let Ok(results) = self
            .search
            .execute_with_status(input.clone(), status.as_ref())
            .await
        else {
            return;
        };
        drop(status);

        self.last_location = SearchRestaurantsInput {
            term: String::new(),
            ..input
        };
        self.shown = results.len().min(self.output.initial_results.max(1));
        self.results = results;
        self.print_results();
    }

    fn print_results(&self) {
        let output =
            ConsoleFormatter::format_results(&self.results, self.shown, Some(self.room.session()));
        println!("{}", output);
    }

    fn add(&mut self, position: usize, note: &str) {
        let business = position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
            .cloned();
        let Some(business) = business else {
            ConsoleStatus.on_error(&format!(
                "No search result #{}. Run a search first.",
                position
            ));
            return;
        };

        if self.room.nominate(business, note, &ConsoleStatus).is_ok() {
            self.sequencer.cancel();
        }
    }

    fn vote(&mut self, target: VoteTarget) {
        let id = match target {
            VoteTarget::Position(position) => match self.room.pick_at(position) {
                Some(pick) => pick.id.clone(),
                None => {
                    ConsoleStatus.on_error(&format!("No pick #{}. Try /picks.", position));
                    return;
                }
            },
            VoteTarget::Id(id) => PickId::new(id),
        };

        if let VoteOutcome::Counted { votes } = self.room.vote(&id, &ConsoleStatus) {
            self.sequencer.cancel();
            let name = self
                .room
                .session()
                .store()
                .get(&id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            ConsoleStatus.on_status(&format!(
                "Vote for {} ({} {})",
                name,
                votes,
                if votes == 1 { "vote" } else { "votes" }
            ));
        }
    }

    fn print_picks(&self) {
        println!(
            "{}",
            ConsoleFormatter::format_picks(self.room.room(), self.room.session())
        );
    }

    async fn lock(&mut self) {
        let Some(outcome) = self.room.lock(&ConsoleStatus) else {
            if self.room.session().picks().is_empty() {
                println!("{}", "Nothing to lock yet. Add a pick first.".dimmed());
            } else {
                println!("{}", "Votes are already locked.".dimmed());
            }
            return;
        };

        match outcome {
            LockOutcome::Winner { id } => {
                let name = self
                    .room
                    .session()
                    .store()
                    .get(&id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| id.to_string());
                let token = self.sequencer.begin();
                play(&token, self.sequencer.announce_winner(&name, &token)).await;
            }
            LockOutcome::Tie { .. } => self.print_picks(),
            LockOutcome::NoVotes => {}
        }
    }

    async fn spin(&mut self) {
        let leader_names: Vec<String> = match self.room.session().view() {
            VotingView::LockedTiedUnresolved { leaders }
            | VotingView::LockedTiedResolved { leaders, .. } => {
                leaders.iter().map(|p| p.name.clone()).collect()
            }
            VotingView::Open => {
                ConsoleStatus.on_error("Lock the votes first with /lock.");
                return;
            }
            _ => {
                ConsoleStatus.on_error("There is no tie to break.");
                return;
            }
        };

        let winner_id = match self.room.spin() {
            Ok(id) => id,
            Err(e) => {
                ConsoleStatus.on_error(&e.to_string());
                return;
            }
        };

        let winner_name = self
            .room
            .session()
            .store()
            .get(&winner_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| winner_id.to_string());

        let token = self.sequencer.begin();
        let outcome = play(
            &token,
            self.sequencer
                .spin_wheel(&leader_names, &winner_name, &token),
        )
        .await;
        if outcome == Announcement::Cancelled {
            println!("{}", "(skipped)".dimmed());
        }

        if let Some(winner) = self.room.session().current_winner() {
            println!("{}", ConsoleFormatter::format_winner_banner(winner));
        }
    }
}

/// Run an announcement until it finishes or Ctrl-C cancels it
async fn play(
    token: &CancellationToken,
    announcement: impl Future<Output = Announcement>,
) -> Announcement {
    tokio::select! {
        outcome = announcement => outcome,
        _ = tokio::signal::ctrl_c() => {
            token.cancel();
            Announcement::Cancelled
        }
    }
}
