//! Category reads and writes.

use serde::Serialize;
use serde_json::Value;

use super::{deleted, Client};
use crate::command::{Fields, RefundBehaviour, Verb};
use crate::error::{Error, Result};
use crate::transport::{RemoteRequest, Transport};

/// JSON body for category create/update, unset fields omitted.
#[derive(Debug, Serialize, Default, PartialEq)]
struct CategoryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colour: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_transfer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_bill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roll_up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refund_behaviour: Option<RefundBehaviour>,
}

impl<'a> CategoryBody<'a> {
    fn from_fields(fields: &'a Fields) -> Result<Self> {
        let title = fields.title.as_deref().map(str::trim);
        if title == Some("") {
            return Err(Error::validation("title must not be empty"));
        }
        let colour = fields.colour.as_deref().map(str::trim);
        if let Some(colour) = colour {
            if !is_hex_colour(colour) {
                return Err(Error::validation(format!(
                    "invalid colour '{colour}': expected a CSS hex colour like #ff0000"
                )));
            }
        }
        Ok(Self {
            title,
            colour,
            parent_id: fields.parent_id,
            is_transfer: fields.is_transfer,
            is_bill: fields.is_bill,
            roll_up: fields.roll_up,
            refund_behaviour: fields.refund_behaviour,
        })
    }

    fn into_json(self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| Error::validation(format!("could not encode category: {e}")))
    }
}

fn is_hex_colour(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

impl<T: Transport> Client<T> {
    pub async fn list_categories(&self, user_id: u64) -> Result<Value> {
        self.read(RemoteRequest::get(format!("/users/{user_id}/categories")))
            .await
    }

    pub async fn get_category(&self, id: u64) -> Result<Value> {
        self.read(RemoteRequest::get(format!("/categories/{id}")))
            .await
    }

    /// Creates a category for a user. Needs a title.
    pub async fn create_category(&self, user_id: u64, fields: &Fields) -> Result<Value> {
        self.write(Verb::Create, || {
            let body = CategoryBody::from_fields(fields)?;
            if body.title.is_none() {
                return Err(Error::validation("missing required fields: --title"));
            }
            Ok(RemoteRequest::post(
                format!("/users/{user_id}/categories"),
                body.into_json()?,
            ))
        })
        .await
    }

    pub async fn update_category(&self, id: u64, fields: &Fields) -> Result<Value> {
        self.write(Verb::Update, || {
            let body = CategoryBody::from_fields(fields)?;
            if body == CategoryBody::default() {
                return Err(Error::validation("no fields to update"));
            }
            Ok(RemoteRequest::put(format!("/categories/{id}"), body.into_json()?))
        })
        .await
    }

    /// Deletes a category. Upstream also drops its budgets and uncategorises
    /// its transactions.
    pub async fn delete_category(&self, id: u64) -> Result<Value> {
        self.write(Verb::Delete, || {
            Ok(RemoteRequest::delete(format!("/categories/{id}")))
        })
        .await?;
        Ok(deleted(format!("Category {id} deleted")))
    }
}
