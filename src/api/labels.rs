//! Transaction labels.

use serde_json::Value;

use super::Client;
use crate::error::Result;
use crate::transport::{RemoteRequest, Transport};

impl<T: Transport> Client<T> {
    /// Lists every label the user has applied to transactions.
    pub async fn list_labels(&self, user_id: u64) -> Result<Value> {
        self.read(RemoteRequest::get(format!("/users/{user_id}/labels")))
            .await
    }
}
