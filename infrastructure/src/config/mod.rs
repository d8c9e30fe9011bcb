//! Configuration file loading for dishide
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DISHIDE_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./dishide.toml` or `./.dishide.toml`
//! 4. Global: `~/.config/dishide/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigValidationError, DEFAULT_SEARCH_ENDPOINT, FileAnnounceConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileRoomConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
