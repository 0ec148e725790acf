//! Attachments (receipts, invoices) and their links to transactions.
//!
//! File upload is not supported; these operations read, retitle, delete and
//! link attachments that already exist upstream.

use serde_json::{json, Value};

use super::{deleted, Client};
use crate::command::{Fields, Scope, Verb};
use crate::error::{Error, Result};
use crate::transport::{RemoteRequest, Transport};

impl<T: Transport> Client<T> {
    pub async fn get_attachment(&self, id: u64) -> Result<Value> {
        self.read(RemoteRequest::get(format!("/attachments/{id}")))
            .await
    }

    /// Lists attachments belonging to a user or linked to a transaction.
    pub async fn list_attachments(&self, scope: Scope, owner_id: u64) -> Result<Value> {
        let path = match scope {
            Scope::User => format!("/users/{owner_id}/attachments"),
            Scope::Transaction => format!("/transactions/{owner_id}/attachments"),
            other => {
                return Err(Error::validation(format!(
                    "attachments cannot be listed by {other:?}"
                )))
            }
        };
        self.read(RemoteRequest::get(path)).await
    }

    /// Retitles an attachment. Without `--title` the upstream record is
    /// re-saved unchanged.
    pub async fn update_attachment(&self, id: u64, fields: &Fields) -> Result<Value> {
        self.write(Verb::Update, || {
            let body = match fields.title.as_deref().map(str::trim) {
                Some("") => return Err(Error::validation("title must not be empty")),
                Some(title) => json!({ "title": title }),
                None => json!({}),
            };
            Ok(RemoteRequest::put(format!("/attachments/{id}"), body))
        })
        .await
    }

    pub async fn delete_attachment(&self, id: u64) -> Result<Value> {
        self.write(Verb::Delete, || {
            Ok(RemoteRequest::delete(format!("/attachments/{id}")))
        })
        .await?;
        Ok(deleted(format!("Attachment {id} deleted")))
    }

    pub async fn assign_attachment(
        &self,
        transaction_id: u64,
        attachment_id: u64,
    ) -> Result<Value> {
        self.write(Verb::Assign, || {
            Ok(RemoteRequest::post(
                format!("/transactions/{transaction_id}/attachments"),
                json!({ "attachment_id": attachment_id }),
            ))
        })
        .await
    }

    pub async fn unassign_attachment(
        &self,
        transaction_id: u64,
        attachment_id: u64,
    ) -> Result<Value> {
        self.write(Verb::Unassign, || {
            Ok(RemoteRequest::delete(format!(
                "/transactions/{transaction_id}/attachments/{attachment_id}"
            )))
        })
        .await?;
        Ok(deleted(format!(
            "Attachment {attachment_id} unassigned from transaction {transaction_id}"
        )))
    }
}
