//! Non-secret settings for pocketsmith.
//!
//! Settings come from an optional TOML file at the platform's XDG config path
//! (e.g. `~/.config/pocketsmith/config.toml` on Linux), then environment
//! overrides. Credentials never live here; see [`crate::credentials`].

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;

use anyhow::Result;

impl Config {
    /// Load config with precedence: environment > file > defaults.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Like [`Config::load`], reading variables through `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = Self::config_path(&lookup)?;
        let mut config = Self::load_file(&path)?.unwrap_or_default();
        config.apply_env_overrides(&lookup);
        config.validate()?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
