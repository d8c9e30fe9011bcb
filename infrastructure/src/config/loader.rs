//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "dishide";
const PROJECT_FILES: [&str; 2] = ["dishide.toml", ".dishide.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DISHIDE_` environment variables (`DISHIDE_SEARCH__LIMIT=5`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./dishide.toml` or `./.dishide.toml`
    /// 4. Global: `~/.config/dishide/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("DISHIDE_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path (`~/.config/dishide/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Directory for room files, history and logs
    ///
    /// `room.data_dir` wins; otherwise the platform data dir, falling back
    /// to `./.dishide` when the platform has none.
    pub fn data_dir(config: &FileConfig) -> PathBuf {
        if let Some(dir) = config.room.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".dishide"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     DISHIDE_* variables");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./dishide.toml or ./.dishide.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.room.default, "demo");
        assert_eq!(config.search.limit, 8);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("dishide"));
    }

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[room]\ndefault = \"lunch\"\n\n[announce]\nspin_ms = 10").unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.room.default, "lunch");
        assert_eq!(config.announce.spin_ms, 10);
        // Untouched sections keep their defaults
        assert_eq!(config.announce.celebration_ms, 2600);
    }

    #[test]
    fn test_data_dir_prefers_configured_path() {
        let mut config = FileConfig::default();
        config.room.data_dir = Some("/tmp/dishide-test".to_string());
        assert_eq!(
            ConfigLoader::data_dir(&config),
            PathBuf::from("/tmp/dishide-test")
        );
    }

    #[test]
    fn test_data_dir_ignores_blank_setting() {
        let mut config = FileConfig::default();
        config.room.data_dir = Some("  ".to_string());
        assert_ne!(ConfigLoader::data_dir(&config), PathBuf::from("  "));
    }
}
