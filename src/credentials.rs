//! Developer key and write-permission resolution.
//!
//! Both values come from the process environment and are read once at
//! startup into an immutable [`Credentials`]. The write flag defaults to off.

use crate::constants::{ENV_ALLOW_WRITES, ENV_DEVELOPER_KEY};
use crate::error::{Error, Result};

/// Authentication material for the lifetime of the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    developer_key: String,
    writes_allowed: bool,
}

impl Credentials {
    /// Builds credentials directly. Rejects an empty key like [`resolve`] does.
    pub fn new(developer_key: impl Into<String>, writes_allowed: bool) -> Result<Self> {
        let developer_key = developer_key.into().trim().to_string();
        if developer_key.is_empty() {
            return Err(missing_key());
        }
        Ok(Self {
            developer_key,
            writes_allowed,
        })
    }

    pub fn developer_key(&self) -> &str {
        &self.developer_key
    }

    pub fn writes_allowed(&self) -> bool {
        self.writes_allowed
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_key", &"<redacted>")
            .field("writes_allowed", &self.writes_allowed)
            .finish()
    }
}

/// Reads credentials from the process environment.
pub fn resolve() -> Result<Credentials> {
    resolve_with(|name| std::env::var(name).ok())
}

/// Reads credentials through an arbitrary variable lookup.
pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
    let key = lookup(ENV_DEVELOPER_KEY).unwrap_or_default();
    let writes_allowed = writes_enabled(&lookup);
    Credentials::new(key, writes_allowed)
}

/// Whether the write flag is set to a truthy value.
///
/// Usable without a developer key, e.g. for `config show`.
pub fn writes_enabled(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(ENV_ALLOW_WRITES).is_some_and(|v| is_truthy(&v))
}

/// Boolean parsing for flag-style environment values. Anything unrecognized is false.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn missing_key() -> Error {
    Error::config(format!("developer key required: set {ENV_DEVELOPER_KEY}"))
}
