//! Environment overrides and validation.

use anyhow::{bail, Result};

use super::types::Config;
use crate::constants::{ENV_BASE_URL, MAX_PER_PAGE, MIN_PER_PAGE};

impl Config {
    /// Replaces file values with their environment counterparts, when set.
    pub(super) fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL) {
            let url = url.trim();
            if !url.is_empty() {
                self.base_url = url.to_string();
            }
        }
    }

    pub(super) fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.per_page) {
            bail!(
                "per_page must be between {MIN_PER_PAGE} and {MAX_PER_PAGE}, got {}",
                self.per_page
            );
        }
        Ok(())
    }
}
