//! Transaction reads and writes.

use serde::Serialize;
use serde_json::Value;

use super::{deleted, Client};
use crate::command::{Fields, Filters, Scope, Verb};
use crate::error::{Error, Result};
use crate::params::{self, join_ids, Paging};
use crate::transport::{RemoteRequest, Transport};

/// JSON body for transaction create/update. Unset fields are left out so an
/// update never clears values the user didn't mention.
#[derive(Debug, Serialize, Default, PartialEq)]
struct TransactionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    payee: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cheque_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_transfer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    needs_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

impl<'a> TransactionBody<'a> {
    fn from_fields(fields: &'a Fields) -> Result<Self> {
        let payee = fields.payee.as_deref().map(str::trim);
        if payee == Some("") {
            return Err(Error::validation("payee must not be empty"));
        }
        if let Some(amount) = fields.amount {
            if !amount.is_finite() {
                return Err(Error::validation(format!("invalid amount '{amount}'")));
            }
        }
        let date = fields
            .date
            .as_deref()
            .map(|raw| params::parse_date("date", raw))
            .transpose()?
            .map(|d| d.format("%Y-%m-%d").to_string());

        Ok(Self {
            payee,
            amount: fields.amount,
            date,
            category_id: fields.category_id,
            memo: fields.memo.as_deref(),
            note: fields.note.as_deref(),
            cheque_number: fields.cheque_number.as_deref(),
            is_transfer: fields.is_transfer,
            needs_review: fields.needs_review,
            labels: fields.labels.as_deref(),
        })
    }

    fn into_json(self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| Error::validation(format!("could not encode transaction: {e}")))
    }
}

impl<T: Transport> Client<T> {
    pub async fn get_transaction(&self, id: u64) -> Result<Value> {
        self.read(RemoteRequest::get(format!("/transactions/{id}")))
            .await
    }

    /// Lists transactions owned by a user, account, transaction account or
    /// set of categories.
    pub async fn list_transactions(
        &self,
        scope: Scope,
        owner_ids: &[u64],
        filters: &Filters,
    ) -> Result<Value> {
        let path = listing_path(scope, owner_ids)?;
        let query = params::build(
            filters,
            Paging::On {
                default_per_page: self.default_per_page,
            },
        )?;
        self.read(RemoteRequest::get(path).with_query(query)).await
    }

    /// Creates a transaction in a transaction account. Needs payee, amount and date.
    pub async fn create_transaction(&self, account_id: u64, fields: &Fields) -> Result<Value> {
        self.write(Verb::Create, || {
            let body = TransactionBody::from_fields(fields)?;
            let missing: Vec<&str> = [
                ("--payee", body.payee.is_none()),
                ("--amount", body.amount.is_none()),
                ("--date", body.date.is_none()),
            ]
            .into_iter()
            .filter_map(|(flag, absent)| absent.then_some(flag))
            .collect();
            if !missing.is_empty() {
                return Err(Error::validation(format!(
                    "missing required fields: {}",
                    missing.join(", ")
                )));
            }
            Ok(RemoteRequest::post(
                format!("/transaction_accounts/{account_id}/transactions"),
                body.into_json()?,
            ))
        })
        .await
    }

    /// Applies a partial update; only supplied fields are sent.
    pub async fn update_transaction(&self, id: u64, fields: &Fields) -> Result<Value> {
        self.write(Verb::Update, || {
            let body = TransactionBody::from_fields(fields)?;
            if body == TransactionBody::default() {
                return Err(Error::validation("no fields to update"));
            }
            Ok(RemoteRequest::put(
                format!("/transactions/{id}"),
                body.into_json()?,
            ))
        })
        .await
    }

    pub async fn delete_transaction(&self, id: u64) -> Result<Value> {
        self.write(Verb::Delete, || {
            Ok(RemoteRequest::delete(format!("/transactions/{id}")))
        })
        .await?;
        Ok(deleted(format!("Transaction {id} deleted")))
    }
}

fn listing_path(scope: Scope, ids: &[u64]) -> Result<String> {
    if ids.is_empty() {
        return Err(Error::validation("an owner id is required"));
    }
    let single = || match ids {
        [id] => Ok(*id),
        _ => Err(Error::validation("exactly one owner id is expected")),
    };
    Ok(match scope {
        Scope::User => format!("/users/{}/transactions", single()?),
        Scope::Account => format!("/accounts/{}/transactions", single()?),
        Scope::TransactionAccount => {
            format!("/transaction_accounts/{}/transactions", single()?)
        }
        Scope::Category => format!("/categories/{}/transactions", join_ids(ids)),
        Scope::Transaction => {
            return Err(Error::validation(
                "transactions cannot be listed by transaction",
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_omits_unset_fields() {
        let fields = Fields {
            category_id: Some(28637787),
            ..Fields::default()
        };
        let body = TransactionBody::from_fields(&fields).unwrap().into_json().unwrap();
        assert_eq!(body, json!({"category_id": 28637787}));
    }

    #[test]
    fn test_body_normalizes_date() {
        let fields = Fields {
            date: Some(" 2024-01-15 ".into()),
            ..Fields::default()
        };
        let body = TransactionBody::from_fields(&fields).unwrap();
        assert_eq!(body.date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_body_rejects_bad_input() {
        for fields in [
            Fields {
                date: Some("2024-99-01".into()),
                ..Fields::default()
            },
            Fields {
                payee: Some("  ".into()),
                ..Fields::default()
            },
            Fields {
                amount: Some(f64::NAN),
                ..Fields::default()
            },
        ] {
            assert!(matches!(
                TransactionBody::from_fields(&fields),
                Err(Error::Validation(_))
            ));
        }
    }

    #[test]
    fn test_listing_paths() {
        assert_eq!(
            listing_path(Scope::User, &[123456]).unwrap(),
            "/users/123456/transactions"
        );
        assert_eq!(
            listing_path(Scope::Account, &[7]).unwrap(),
            "/accounts/7/transactions"
        );
        assert_eq!(
            listing_path(Scope::TransactionAccount, &[8]).unwrap(),
            "/transaction_accounts/8/transactions"
        );
        assert_eq!(
            listing_path(Scope::Category, &[1, 2, 3]).unwrap(),
            "/categories/1,2,3/transactions"
        );
        assert!(listing_path(Scope::User, &[1, 2]).is_err());
        assert!(listing_path(Scope::Category, &[]).is_err());
    }
}
