//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted, colored listing
    Full,
    /// JSON records
    Json,
}

/// CLI arguments for dishide
#[derive(Parser, Debug)]
#[command(name = "dishide")]
#[command(author, version, about = "Pick a restaurant together: search, nominate, vote, spin")]
#[command(long_about = r#"
dishide helps a group decide where to eat.

Search the directory, nominate picks with a short note, vote, then lock the
vote. An outright leader wins; a tie is settled by spinning the wheel.

Picks are saved per room, so everyone using the same room on this machine
sees the same list.

Configuration files are loaded from (in priority order):
1. DISHIDE_* environment variables
2. --config <path>     Explicit config file
3. ./dishide.toml      Project-level config
4. ~/.config/dishide/config.toml   Global config

The directory API key is read from search.api_key or YELP_API_KEY.

Example:
  dishide --room friday
  dishide --search tacos --location "Austin, TX"
  dishide --search ramen --lat 47.61 --lon -122.33 --output json
"#)]
pub struct Cli {
    /// Room to join (defaults to room.default, then "demo")
    #[arg(short, long, value_name = "ROOM")]
    pub room: Option<String>,

    /// Run a single search and exit instead of starting the REPL
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Place to search near (used with --search)
    #[arg(short, long, value_name = "PLACE")]
    pub location: Option<String>,

    /// Latitude to search near (used with --search and --lon)
    #[arg(long, value_name = "LAT", allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude to search near (used with --search and --lat)
    #[arg(long, value_name = "LON", allow_hyphen_values = true)]
    pub lon: Option<String>,

    /// Number of results to ask for (1-20)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format for --search
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress spinners and animations
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged config, then exit
    #[arg(long)]
    pub show_config: bool,
}
