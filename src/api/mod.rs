//! Resource operations on the PocketSmith API.
//!
//! [`Client`] owns the credentials and a [`Transport`] and exposes one method
//! per remote verb, grouped by resource in the submodules. Reads go straight
//! to the transport; writes pass the write gate first, then validate their
//! input, and only then build a request.

mod attachments;
mod budget;
mod categories;
mod dispatch;
mod labels;
mod transactions;
mod user;

use serde_json::{json, Value};

use crate::command::Verb;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::permissions;
use crate::transport::{RemoteRequest, Transport};

/// Authenticated entry point for every resource operation.
pub struct Client<T> {
    transport: T,
    credentials: Credentials,
    /// Page size for listings that don't set `--per-page`.
    default_per_page: u32,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, credentials: Credentials, default_per_page: u32) -> Self {
        Self {
            transport,
            credentials,
            default_per_page,
        }
    }

    /// Sends a request that does not change remote state.
    async fn read(&self, request: RemoteRequest) -> Result<Value> {
        self.transport
            .send(request, &self.credentials)
            .await
            .into_result()
    }

    /// Gates, builds and sends a mutating request.
    ///
    /// `build` runs only after the gate allowed `verb`, so neither validation
    /// nor the network is reached while writes are disabled.
    async fn write(
        &self,
        verb: Verb,
        build: impl FnOnce() -> Result<RemoteRequest>,
    ) -> Result<Value> {
        permissions::authorize(verb, &self.credentials)?;
        let request = build()?;
        self.transport
            .send(request, &self.credentials)
            .await
            .into_result()
    }
}

/// Stands in for the empty body the API returns on deletes.
fn deleted(what: String) -> Value {
    json!({ "status": "success", "message": what })
}
