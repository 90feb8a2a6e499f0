//! Configuration loading and management.

use std::path::{Path, PathBuf};

use bs_core::DEFAULT_PAGE_SIZE;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the city CSV files.
    pub data_dir: PathBuf,

    /// Rows shown per window in the raw-row viewer.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, optionally merging a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (BIKESHARE_*)
        figment = figment.merge(Env::prefixed("BIKESHARE_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for bikeshare.
///
/// On Linux: `~/.config/bikeshare`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bikeshare"))
}
