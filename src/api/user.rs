//! The authenticated user.

use serde_json::{json, Value};

use super::Client;
use crate::error::Result;
use crate::transport::{RemoteRequest, Transport};

impl<T: Transport> Client<T> {
    /// Fetches the user the developer key belongs to.
    pub async fn me(&self) -> Result<Value> {
        self.read(RemoteRequest::get("/me")).await
    }

    /// Confirms the key is accepted upstream and summarizes who it belongs to.
    pub async fn auth_status(&self) -> Result<Value> {
        let user = self.me().await?;
        Ok(json!({
            "authenticated": true,
            "user_id": user.get("id").cloned().unwrap_or(Value::Null),
            "login": user.get("login").cloned().unwrap_or(Value::Null),
            "name": user.get("name").cloned().unwrap_or(Value::Null),
            "email": user.get("email").cloned().unwrap_or(Value::Null),
        }))
    }
}
