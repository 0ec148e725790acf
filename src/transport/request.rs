//! Request and result shapes exchanged with a [`Transport`](super::Transport).

use reqwest::Method;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::params::Query;

/// A transport-ready API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: Method,
    /// Path below the API base URL, starting with `/`.
    pub path: String,
    pub query: Query,
    pub body: Option<Value>,
}

impl RemoteRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
        }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Classified outcome of one call.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResult {
    /// 2xx response. `body` is `Null` when the API sent no content.
    Success { status: u16, body: Value },
    /// Non-2xx response (`status` set) or no response at all (`status` unset).
    Failure { status: Option<u16>, message: String },
}

impl RemoteResult {
    /// Folds the result into the crate-wide error taxonomy.
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::Failure {
                status: Some(status),
                message,
            } => Err(Error::Remote { status, message }),
            Self::Failure {
                status: None,
                message,
            } => Err(Error::Transport(message)),
        }
    }
}
