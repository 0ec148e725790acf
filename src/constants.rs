//! Centralized constants for pocketsmith.
//!
//! Environment variable names, API defaults and exit codes live here
//! so they can be changed in one place.

/// Application name used for the config directory and user agent.
pub const APP_NAME: &str = "pocketsmith";

/// Default PocketSmith API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.pocketsmith.com/v2";

/// Header carrying the developer key on every request.
pub const DEVELOPER_KEY_HEADER: &str = "X-Developer-Key";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("pocketsmith-cli/", env!("CARGO_PKG_VERSION"));

// --- Environment ---

/// Required developer key.
pub const ENV_DEVELOPER_KEY: &str = "POCKETSMITH_DEVELOPER_KEY";

/// Opt-in switch for mutating operations.
pub const ENV_ALLOW_WRITES: &str = "POCKETSMITH_ALLOW_WRITES";

/// Overrides the API base URL.
pub const ENV_BASE_URL: &str = "POCKETSMITH_BASE_URL";

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "POCKETSMITH_CONFIG";

/// Tracing filter directive.
pub const ENV_LOG: &str = "POCKETSMITH_LOG";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

// --- Pagination ---

/// Page requested when `--page` is omitted.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when neither `--per-page` nor config sets one.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Smallest page size the API accepts.
pub const MIN_PER_PAGE: u32 = 10;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 1000;

// --- Output ---

/// Exit code for every failure kind.
pub const EXIT_FAILURE: u8 = 1;

/// Maximum characters of a non-JSON error body echoed back to the user.
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;
