//! Struct definitions and serde defaults for pocketsmith configuration.

use serde::{Deserialize, Serialize};

/// Root configuration, deserialized from `config.toml`.
///
/// Fields use serde defaults so the CLI runs without any config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// API root every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page size for transaction listings when `--per-page` is omitted.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

pub(super) fn default_base_url() -> String {
    crate::constants::DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_per_page() -> u32 {
    crate::constants::DEFAULT_PER_PAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
        }
    }
}
