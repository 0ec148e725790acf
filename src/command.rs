//! The validated description of one invocation.
//!
//! The CLI layer produces a [`CommandDescriptor`]; the dispatcher consumes it
//! read-only. Filter and field options are typed rather than stringly keyed,
//! so an unknown option can never reach the core.

use serde::Serialize;

/// Remote entity family a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Transaction,
    Category,
    Label,
    Budget,
    Attachment,
}

/// What to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Get,
    Create,
    Update,
    Delete,
    AuthStatus,
    /// Budget summary over a period.
    Summary,
    /// Budget trend analysis over a period.
    Trend,
    /// Drop the server-side forecast cache.
    Refresh,
    /// Link an existing attachment to a transaction.
    Assign,
    /// Remove an attachment from a transaction, keeping the attachment.
    Unassign,
}

impl Verb {
    /// True for verbs that change remote state.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Create
                | Self::Update
                | Self::Delete
                | Self::Refresh
                | Self::Assign
                | Self::Unassign
        )
    }
}

/// Owner a listing is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    User,
    Account,
    /// One or more categories; ids are joined with commas in the path.
    Category,
    TransactionAccount,
    /// A single transaction (attachment listings only).
    Transaction,
}

/// Transaction direction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

/// Budget aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Period {
    Weeks,
    Months,
    Years,
    Event,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
            Self::Event => "event",
        }
    }
}

/// How a category treats refunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RefundBehaviour {
    DebitOnly,
    CreditOnly,
}

/// Query-side options. Every field is optional; absent fields are never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub updated_since: Option<String>,
    pub uncategorised: bool,
    pub needs_review: bool,
    pub transaction_type: Option<TransactionType>,
    pub period: Option<Period>,
    pub interval: Option<u32>,
    pub categories: Vec<u64>,
    pub scenarios: Vec<u64>,
    /// Budget listing: roll child categories up into their parents.
    pub roll_up: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Body-side options for create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    // transaction
    pub payee: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub category_id: Option<u64>,
    pub memo: Option<String>,
    pub note: Option<String>,
    pub cheque_number: Option<String>,
    pub is_transfer: Option<bool>,
    pub needs_review: Option<bool>,
    pub labels: Option<Vec<String>>,
    // category
    pub title: Option<String>,
    pub colour: Option<String>,
    pub parent_id: Option<u64>,
    pub is_bill: Option<bool>,
    pub roll_up: Option<bool>,
    pub refund_behaviour: Option<RefundBehaviour>,
}

/// One fully parsed command, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub resource: Resource,
    pub verb: Verb,
    /// Path parameters in the order the command declares them.
    pub identifiers: Vec<u64>,
    pub scope: Scope,
    pub filters: Filters,
    pub fields: Fields,
}

impl CommandDescriptor {
    pub fn new(resource: Resource, verb: Verb) -> Self {
        Self {
            resource,
            verb,
            identifiers: Vec::new(),
            scope: Scope::default(),
            filters: Filters::default(),
            fields: Fields::default(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.identifiers.push(id);
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.identifiers.extend(ids);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_verbs() {
        for verb in [
            Verb::Create,
            Verb::Update,
            Verb::Delete,
            Verb::Refresh,
            Verb::Assign,
            Verb::Unassign,
        ] {
            assert!(verb.is_mutating(), "{verb:?} should be mutating");
        }
        for verb in [Verb::List, Verb::Get, Verb::AuthStatus, Verb::Summary, Verb::Trend] {
            assert!(!verb.is_mutating(), "{verb:?} should be a read");
        }
    }

    #[test]
    fn test_builder_keeps_identifier_order() {
        let cmd = CommandDescriptor::new(Resource::Transaction, Verb::List)
            .with_scope(Scope::Category)
            .with_ids([3, 1, 2]);
        assert_eq!(cmd.identifiers, vec![3, 1, 2]);
        assert_eq!(cmd.scope, Scope::Category);
    }
}
