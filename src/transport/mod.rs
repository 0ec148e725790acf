//! HTTP transport abstraction for the PocketSmith API.
//!
//! Resource operations describe a call as a [`RemoteRequest`] and hand it to a
//! [`Transport`] together with the resolved credentials. The transport always
//! answers with a fully formed [`RemoteResult`]; it never retries.

mod client;
mod request;

pub use client::HttpTransport;
pub use request::{RemoteRequest, RemoteResult};

use async_trait::async_trait;

use crate::credentials::Credentials;

/// Anything that can carry one request to the API and classify the answer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request`, authenticating with `credentials`.
    async fn send(&self, request: RemoteRequest, credentials: &Credentials) -> RemoteResult;
}
