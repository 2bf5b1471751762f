//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mm_core::Theme;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,
    /// Theme for rendered mosaics.
    #[serde(default)]
    pub theme: Theme,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("theme", &self.theme)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("mm.db"),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // MM_DATABASE_PATH, MM_THEME
        figment = figment.merge(Env::prefixed("MM_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for mm.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mm"))
}

/// Returns the platform-specific data directory for mm.
///
/// On Linux: `~/.local/share/mm`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mm"))
}
