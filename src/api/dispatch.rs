//! Routing of a [`CommandDescriptor`] to its resource operation.

use serde_json::Value;

use super::Client;
use crate::command::{CommandDescriptor, Resource, Verb};
use crate::error::{Error, Result};
use crate::transport::Transport;

impl<T: Transport> Client<T> {
    /// Runs the operation `command` describes.
    pub async fn execute(&self, command: &CommandDescriptor) -> Result<Value> {
        tracing::debug!(resource = ?command.resource, verb = ?command.verb, "dispatching");
        let id = || first_id(command);

        match (command.resource, command.verb) {
            (Resource::User, Verb::Get) => self.me().await,
            (Resource::User, Verb::AuthStatus) => self.auth_status().await,

            (Resource::Transaction, Verb::Get) => self.get_transaction(id()?).await,
            (Resource::Transaction, Verb::List) => {
                self.list_transactions(command.scope, &command.identifiers, &command.filters)
                    .await
            }
            (Resource::Transaction, Verb::Create) => {
                self.create_transaction(id()?, &command.fields).await
            }
            (Resource::Transaction, Verb::Update) => {
                self.update_transaction(id()?, &command.fields).await
            }
            (Resource::Transaction, Verb::Delete) => self.delete_transaction(id()?).await,

            (Resource::Category, Verb::List) => self.list_categories(id()?).await,
            (Resource::Category, Verb::Get) => self.get_category(id()?).await,
            (Resource::Category, Verb::Create) => {
                self.create_category(id()?, &command.fields).await
            }
            (Resource::Category, Verb::Update) => {
                self.update_category(id()?, &command.fields).await
            }
            (Resource::Category, Verb::Delete) => self.delete_category(id()?).await,

            (Resource::Label, Verb::List) => self.list_labels(id()?).await,

            (Resource::Budget, Verb::List) => self.list_budget(id()?, &command.filters).await,
            (Resource::Budget, Verb::Summary) => {
                self.budget_summary(id()?, &command.filters).await
            }
            (Resource::Budget, Verb::Trend) => self.budget_trend(id()?, &command.filters).await,
            (Resource::Budget, Verb::Refresh) => self.refresh_forecast(id()?).await,

            (Resource::Attachment, Verb::Get) => self.get_attachment(id()?).await,
            (Resource::Attachment, Verb::List) => {
                self.list_attachments(command.scope, id()?).await
            }
            (Resource::Attachment, Verb::Update) => {
                self.update_attachment(id()?, &command.fields).await
            }
            (Resource::Attachment, Verb::Delete) => self.delete_attachment(id()?).await,
            (Resource::Attachment, Verb::Assign) => {
                let (transaction_id, attachment_id) = id_pair(command)?;
                self.assign_attachment(transaction_id, attachment_id).await
            }
            (Resource::Attachment, Verb::Unassign) => {
                let (transaction_id, attachment_id) = id_pair(command)?;
                self.unassign_attachment(transaction_id, attachment_id).await
            }

            (resource, verb) => Err(Error::validation(format!(
                "{verb:?} is not supported for {resource:?}"
            ))),
        }
    }
}

fn first_id(command: &CommandDescriptor) -> Result<u64> {
    command
        .identifiers
        .first()
        .copied()
        .ok_or_else(|| Error::validation("an id is required"))
}

/// Transaction id and attachment id, in that order.
fn id_pair(command: &CommandDescriptor) -> Result<(u64, u64)> {
    match command.identifiers[..] {
        [transaction_id, attachment_id] => Ok((transaction_id, attachment_id)),
        _ => Err(Error::validation(
            "a transaction id and an attachment id are required",
        )),
    }
}
