//! Reqwest-backed transport.
//!
//! Owns the HTTP details only: URL joining, authentication headers, JSON
//! bodies and mapping of status codes and connection failures onto
//! [`RemoteResult`].

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;

use super::request::{RemoteRequest, RemoteResult};
use super::Transport;
use crate::constants::{DEVELOPER_KEY_HEADER, ERROR_BODY_PREVIEW_CHARS, USER_AGENT};
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Sends requests to one API base URL using reqwest's default timeouts.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is not an absolute http(s) URL or
    /// the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid API base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "invalid API base URL '{base_url}': scheme must be http or https"
            )));
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RemoteRequest, credentials: &Credentials) -> RemoteResult {
        let url = self.url_for(&request.path);
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            query = ?request.query.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            "sending request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(DEVELOPER_KEY_HEADER, credentials.developer_key())
            .header(header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return transport_failure(&e),
        };
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        match response.bytes().await {
            Ok(body) => classify(status, &request.path, &body),
            Err(e) => transport_failure(&e),
        }
    }
}

/// Maps a completed HTTP exchange onto a [`RemoteResult`].
pub(crate) fn classify(status: StatusCode, path: &str, body: &[u8]) -> RemoteResult {
    let code = status.as_u16();

    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return RemoteResult::Success {
                status: code,
                body: Value::Null,
            };
        }
        return match serde_json::from_slice(body) {
            Ok(body) => RemoteResult::Success { status: code, body },
            Err(e) => RemoteResult::Failure {
                status: Some(code),
                message: format!("malformed JSON response: {e}"),
            },
        };
    }

    let detail = error_detail(body);
    let message = match status {
        StatusCode::UNAUTHORIZED => with_detail(
            "unauthorized: developer key was rejected".to_string(),
            &detail,
        ),
        StatusCode::NOT_FOUND => with_detail(format!("not found: {path} does not exist"), &detail),
        _ if detail.is_empty() => format!("HTTP {code}"),
        _ => format!("HTTP {code}: {detail}"),
    };
    RemoteResult::Failure {
        status: Some(code),
        message,
    }
}

fn with_detail(message: String, detail: &str) -> String {
    if detail.is_empty() {
        message
    } else {
        format!("{message} ({detail})")
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Prefers the API's `{"error": "..."}` field, falling back to a compacted
/// preview of the raw body.
fn error_detail(body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = json.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
    }

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
    if compact.chars().count() > ERROR_BODY_PREVIEW_CHARS {
        format!("{preview}...")
    } else {
        preview
    }
}

fn transport_failure(error: &reqwest::Error) -> RemoteResult {
    let reason = if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "could not connect to the API"
    } else {
        "request failed"
    };
    tracing::debug!(error = %error, "transport failure");
    RemoteResult::Failure {
        status: None,
        message: format!("{reason}: {error}"),
    }
}
