//! Shared flag groups and their translation into a [`CommandDescriptor`].

use clap::Args;

use super::{
    AttachmentAction, AuthAction, BudgetAction, CategoryAction, Commands, ConfigAction,
    Invocation, LabelAction, TransactionAction,
};
use crate::command::{
    CommandDescriptor, Fields, Filters, Period, RefundBehaviour, Resource, Scope,
    TransactionType, Verb,
};

/// Filters accepted by every transaction listing.
#[derive(Args, Debug, Default)]
pub struct TransactionFilterArgs {
    /// Only transactions on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Only transactions on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
    /// Only transactions changed since this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub updated_since: Option<String>,
    /// Only uncategorised transactions
    #[arg(long)]
    pub uncategorised: bool,
    /// Only debits or only credits
    #[arg(long = "type", value_enum)]
    pub transaction_type: Option<TransactionType>,
    /// Only transactions flagged for review
    #[arg(long)]
    pub needs_review: bool,
    /// Search payee and memo
    #[arg(long)]
    pub search: Option<String>,
    /// Page number (default 1)
    #[arg(long)]
    pub page: Option<u32>,
    /// Results per page, 10 to 1000 (default from config, 30)
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl From<TransactionFilterArgs> for Filters {
    fn from(args: TransactionFilterArgs) -> Self {
        Self {
            search: args.search,
            start_date: args.start_date,
            end_date: args.end_date,
            updated_since: args.updated_since,
            uncategorised: args.uncategorised,
            needs_review: args.needs_review,
            transaction_type: args.transaction_type,
            page: args.page,
            per_page: args.per_page,
            ..Self::default()
        }
    }
}

/// Body fields for transaction create and update.
#[derive(Args, Debug, Default)]
pub struct TransactionFieldArgs {
    /// Payee name
    #[arg(long)]
    pub payee: Option<String>,
    /// Signed amount, negative for debits
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<f64>,
    /// Transaction date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Category to assign
    #[arg(long)]
    pub category_id: Option<u64>,
    /// Bank memo
    #[arg(long)]
    pub memo: Option<String>,
    /// Personal note
    #[arg(long)]
    pub note: Option<String>,
    /// Cheque number
    #[arg(long)]
    pub cheque_number: Option<String>,
    /// Mark as a transfer (true/false)
    #[arg(long)]
    pub is_transfer: Option<bool>,
    /// Flag for review (true/false)
    #[arg(long)]
    pub needs_review: Option<bool>,
    /// Labels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

impl From<TransactionFieldArgs> for Fields {
    fn from(args: TransactionFieldArgs) -> Self {
        Self {
            payee: args.payee,
            amount: args.amount,
            date: args.date,
            category_id: args.category_id,
            memo: args.memo,
            note: args.note,
            cheque_number: args.cheque_number,
            is_transfer: args.is_transfer,
            needs_review: args.needs_review,
            labels: args.labels.map(|labels| {
                labels
                    .into_iter()
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect()
            }),
            ..Self::default()
        }
    }
}

/// Body fields for category create and update.
#[derive(Args, Debug, Default)]
pub struct CategoryFieldArgs {
    /// Category title
    #[arg(long)]
    pub title: Option<String>,
    /// CSS hex colour, e.g. '#ff0000'
    #[arg(long)]
    pub colour: Option<String>,
    /// Parent category ID
    #[arg(long)]
    pub parent_id: Option<u64>,
    /// Transfer category (true/false)
    #[arg(long)]
    pub is_transfer: Option<bool>,
    /// Bill category (true/false)
    #[arg(long)]
    pub is_bill: Option<bool>,
    /// Roll up into the parent category (true/false)
    #[arg(long)]
    pub roll_up: Option<bool>,
    /// How refunds are treated
    #[arg(long, value_enum)]
    pub refund_behaviour: Option<RefundBehaviour>,
}

impl From<CategoryFieldArgs> for Fields {
    fn from(args: CategoryFieldArgs) -> Self {
        Self {
            title: args.title,
            colour: args.colour,
            parent_id: args.parent_id,
            is_transfer: args.is_transfer,
            is_bill: args.is_bill,
            roll_up: args.roll_up,
            refund_behaviour: args.refund_behaviour,
            ..Self::default()
        }
    }
}

/// Period selection for budget summary and trend.
#[derive(Args, Debug, Default)]
pub struct BudgetPeriodArgs {
    /// Aggregation period
    #[arg(long, value_enum)]
    pub period: Option<Period>,
    /// Number of periods per bucket
    #[arg(long)]
    pub interval: Option<u32>,
    /// Start of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// End of the range (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
}

impl From<BudgetPeriodArgs> for Filters {
    fn from(args: BudgetPeriodArgs) -> Self {
        Self {
            period: args.period,
            interval: args.interval,
            start_date: args.start_date,
            end_date: args.end_date,
            ..Self::default()
        }
    }
}

impl Commands {
    /// Translates parsed arguments into what the core should do.
    pub fn into_invocation(self) -> Invocation {
        let descriptor = match self {
            Commands::Config {
                action: ConfigAction::Show,
            } => return Invocation::ShowConfig,
            Commands::Me => CommandDescriptor::new(Resource::User, Verb::Get),
            Commands::Auth {
                action: AuthAction::Status,
            } => CommandDescriptor::new(Resource::User, Verb::AuthStatus),
            Commands::Transactions { action } => transaction(action),
            Commands::Categories { action } => category(action),
            Commands::Labels {
                action: LabelAction::List { user_id },
            } => CommandDescriptor::new(Resource::Label, Verb::List).with_id(user_id),
            Commands::Attachments { action } => attachment(action),
            Commands::Budget { action } => budget(action),
        };
        Invocation::Api(descriptor)
    }
}

fn transaction(action: TransactionAction) -> CommandDescriptor {
    let new = |verb| CommandDescriptor::new(Resource::Transaction, verb);
    let list = |scope, ids: Vec<u64>, filters: TransactionFilterArgs| {
        new(Verb::List)
            .with_scope(scope)
            .with_ids(ids)
            .with_filters(filters.into())
    };

    match action {
        TransactionAction::Get { id } => new(Verb::Get).with_id(id),
        TransactionAction::ListByUser { user_id, filters } => {
            list(Scope::User, vec![user_id], filters)
        }
        TransactionAction::ListByAccount {
            account_id,
            filters,
        } => list(Scope::Account, vec![account_id], filters),
        TransactionAction::ListByCategory {
            category_ids,
            filters,
        } => list(Scope::Category, category_ids, filters),
        TransactionAction::ListByTransactionAccount {
            transaction_account_id,
            filters,
        } => list(
            Scope::TransactionAccount,
            vec![transaction_account_id],
            filters,
        ),
        TransactionAction::Create {
            transaction_account_id,
            fields,
        } => new(Verb::Create)
            .with_id(transaction_account_id)
            .with_fields(fields.into()),
        TransactionAction::Update { id, fields } => {
            new(Verb::Update).with_id(id).with_fields(fields.into())
        }
        TransactionAction::Delete { id } => new(Verb::Delete).with_id(id),
    }
}

fn category(action: CategoryAction) -> CommandDescriptor {
    let new = |verb| CommandDescriptor::new(Resource::Category, verb);
    match action {
        CategoryAction::List { user_id } => new(Verb::List).with_id(user_id),
        CategoryAction::Get { id } => new(Verb::Get).with_id(id),
        CategoryAction::Create { user_id, fields } => {
            new(Verb::Create).with_id(user_id).with_fields(fields.into())
        }
        CategoryAction::Update { id, fields } => {
            new(Verb::Update).with_id(id).with_fields(fields.into())
        }
        CategoryAction::Delete { id } => new(Verb::Delete).with_id(id),
    }
}

fn attachment(action: AttachmentAction) -> CommandDescriptor {
    let new = |verb| CommandDescriptor::new(Resource::Attachment, verb);
    match action {
        AttachmentAction::Get { id } => new(Verb::Get).with_id(id),
        AttachmentAction::ListByUser { user_id } => new(Verb::List).with_id(user_id),
        AttachmentAction::ListByTransaction { transaction_id } => new(Verb::List)
            .with_scope(Scope::Transaction)
            .with_id(transaction_id),
        AttachmentAction::Update { id, title } => new(Verb::Update)
            .with_id(id)
            .with_fields(Fields {
                title,
                ..Fields::default()
            }),
        AttachmentAction::Delete { id } => new(Verb::Delete).with_id(id),
        AttachmentAction::Assign {
            transaction_id,
            attachment_id,
        } => new(Verb::Assign).with_ids([transaction_id, attachment_id]),
        AttachmentAction::Unassign {
            transaction_id,
            attachment_id,
        } => new(Verb::Unassign).with_ids([transaction_id, attachment_id]),
    }
}

fn budget(action: BudgetAction) -> CommandDescriptor {
    let new = |verb| CommandDescriptor::new(Resource::Budget, verb);
    match action {
        BudgetAction::List { user_id, roll_up } => {
            new(Verb::List).with_id(user_id).with_filters(Filters {
                roll_up,
                ..Filters::default()
            })
        }
        BudgetAction::Summary { user_id, period } => new(Verb::Summary)
            .with_id(user_id)
            .with_filters(period.into()),
        BudgetAction::Trend {
            user_id,
            period,
            categories,
            scenarios,
        } => new(Verb::Trend).with_id(user_id).with_filters(Filters {
            categories,
            scenarios,
            ..Filters::from(period)
        }),
        BudgetAction::Refresh { user_id } => new(Verb::Refresh).with_id(user_id),
    }
}
