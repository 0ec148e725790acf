//! XDG path resolution for the pocketsmith config file.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Config;
use crate::constants::{APP_NAME, CONFIG_FILENAME, ENV_CONFIG_PATH};

impl Config {
    /// Returns the platform-specific configuration directory for pocketsmith.
    ///
    /// Returns `~/.config/pocketsmith/` on Linux (`XDG_CONFIG_HOME/pocketsmith`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(APP_NAME);
        Ok(dir)
    }

    /// Returns the config file path, honouring `POCKETSMITH_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and [`Config::config_dir`] fails.
    pub fn config_path(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
        match lookup(ENV_CONFIG_PATH).filter(|p| !p.trim().is_empty()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(Self::config_dir()?.join(CONFIG_FILENAME)),
        }
    }
}
