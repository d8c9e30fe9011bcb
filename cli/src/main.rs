//! CLI entrypoint for dishide
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use dishide_application::{
    NoRoomEventLogger, RoomEventLogger, RoomSessionUseCase, SearchGateway, SearchRestaurantsInput,
    SearchRestaurantsUseCase,
};
use dishide_domain::RoomId;
use dishide_infrastructure::{
    ConfigLoader, FileConfig, JsonPickRepository, JsonlRoomEventLogger, UnavailableSearchGateway,
    YelpSearchGateway,
};
use dishide_presentation::{
    AnnounceTiming, AnnouncementSequencer, Cli, ConsoleFormatter, OutputConfig, OutputFormat,
    ReplConfig, RoomRepl, SpinnerStatus,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", redacted_toml(&config)?);
        return Ok(());
    }

    let data_dir = ConfigLoader::data_dir(&config);
    let _log_guard = init_logging(cli.verbose, config.logging.file, &data_dir);

    info!("Starting dishide");

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    let room = RoomId::new(cli.room.as_deref().unwrap_or(&config.room.default));
    let behavior = config.search.behavior();

    // === Dependency Injection ===
    let events: Arc<dyn RoomEventLogger> = if config.logging.events {
        let path = data_dir.join("events").join(format!("{}.jsonl", room));
        match JsonlRoomEventLogger::new(&path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoRoomEventLogger),
        }
    } else {
        Arc::new(NoRoomEventLogger)
    };

    let gateway: Arc<dyn SearchGateway> = match YelpSearchGateway::new(
        config.search.endpoint.clone(),
        config.search.resolve_api_key(),
        behavior.timeout,
    ) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) if cli.search.is_some() => bail!("{}. Set search.api_key or YELP_API_KEY.", e),
        Err(e) => {
            warn!("Search disabled: {}", e);
            eprintln!("Search is disabled ({}). Set search.api_key or YELP_API_KEY.", e);
            Arc::new(UnavailableSearchGateway::new(e))
        }
    };

    let search = SearchRestaurantsUseCase::new(gateway)
        .with_behavior(behavior)
        .with_events(room.clone(), events.clone());

    // One-shot search mode
    if let Some(term) = cli.search {
        let input = SearchRestaurantsInput {
            term,
            place: cli.location,
            latitude: cli.lat,
            longitude: cli.lon,
            limit: cli.limit,
        };

        let results = if cli.quiet || cli.output == OutputFormat::Json {
            search.execute(input).await?
        } else {
            let status = if std::io::stderr().is_terminal() {
                SpinnerStatus::new()
            } else {
                SpinnerStatus::hidden()
            };
            search.execute_with_status(input, &status).await?
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format_results(&results, results.len(), None),
            OutputFormat::Json => ConsoleFormatter::format_results_json(&results),
        };
        println!("{}", output);
        return Ok(());
    }

    // Interactive room mode
    let repository = Arc::new(JsonPickRepository::new(&data_dir));
    let room_session = RoomSessionUseCase::open(room, repository).with_events(events);

    let timing = AnnounceTiming::from_millis(
        config.announce.enabled,
        config.announce.spin_ms,
        config.announce.celebration_ms,
        config.announce.winner_ms,
    );
    let mut sequencer = AnnouncementSequencer::new(timing);
    if cli.quiet {
        sequencer = sequencer.hidden();
    }

    let history_file = config
        .repl
        .history_file
        .clone()
        .unwrap_or_else(|| data_dir.join("history.txt").to_string_lossy().into_owned());

    let mut repl = RoomRepl::new(room_session, search, sequencer)
        .with_output(OutputConfig {
            color: config.output.color,
            initial_results: config.output.initial_results,
        })
        .with_config(ReplConfig {
            show_progress: !cli.quiet,
            history_file: Some(history_file),
        });

    repl.run().await?;
    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Diagnostics go to stderr; with `logging.file` they are also written to a
/// daily file under `<data dir>/logs`. The returned guard flushes that file
/// and must live until exit.
fn init_logging(verbose: u8, to_file: bool, data_dir: &Path) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if to_file {
        let appender = tracing_appender::rolling::daily(data_dir.join("logs"), "dishide.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Merged config as TOML with the API key masked
fn redacted_toml(config: &FileConfig) -> Result<String> {
    let mut config = config.clone();
    if config.search.api_key.is_some() {
        config.search.api_key = Some("********".to_string());
    }
    toml::to_string_pretty(&config).context("Failed to render configuration")
}
