//! Error taxonomy for a single invocation.
//!
//! Every fail path ends in one [`Error`] value that the output layer turns
//! into a JSON document on stderr. The variant decides the `kind` field; the
//! exit code is the same for all of them.

use thiserror::Error;

/// Terminal failure of one command.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Missing or unreadable local configuration (e.g. no developer key).
    #[error("{0}")]
    Config(String),

    /// A mutating command was attempted while writes are disabled.
    #[error("{0}")]
    Permission(String),

    /// Malformed filter or field input.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status or an unreadable body.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Short machine-readable name for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Permission(_) => "permission",
            Self::Validation(_) => "validation",
            Self::Remote { .. } => "remote",
            Self::Transport(_) => "transport",
        }
    }

    /// HTTP status, when the failure came from an API response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
