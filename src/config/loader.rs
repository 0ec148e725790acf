//! File loading for pocketsmith configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;

impl Config {
    /// Reads and parses the config file at `path`.
    ///
    /// A missing file yields `None`; the CLI never writes one.
    pub(super) fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(Some(config))
    }
}
