//! Command-line interface definition and dispatch for pocketsmith.
//!
//! Uses [`clap`] for argument parsing with derive macros. Parsed arguments are
//! turned into a [`CommandDescriptor`] (see [`args`]) and handed to the API
//! client; the outcome goes through [`output::emit`].

mod args;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use crate::api::Client;
use crate::command::CommandDescriptor;
use crate::config::Config;
use crate::credentials;
use crate::error::{Error, Result};
use crate::output;
use crate::transport::HttpTransport;

pub use args::{
    BudgetPeriodArgs, CategoryFieldArgs, TransactionFieldArgs, TransactionFilterArgs,
};

/// Top-level CLI structure for pocketsmith.
#[derive(Parser)]
#[command(
    name = "pocketsmith",
    version,
    about = "Command-line client for the PocketSmith API",
    long_about = "Command-line client for the PocketSmith API.\n\n\
        Reads POCKETSMITH_DEVELOPER_KEY from the environment. Commands that \
        change data are refused unless POCKETSMITH_ALLOW_WRITES=true."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the pocketsmith CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the authenticated user
    Me,
    /// Check that the developer key is accepted
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Read and change transactions
    Transactions {
        #[command(subcommand)]
        action: TransactionAction,
    },
    /// Read and change categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Read labels
    Labels {
        #[command(subcommand)]
        action: LabelAction,
    },
    /// Read, retitle and link attachments
    Attachments {
        #[command(subcommand)]
        action: AttachmentAction,
    },
    /// Read budgets and refresh forecasts
    Budget {
        #[command(subcommand)]
        action: BudgetAction,
    },
    /// Inspect local configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Verify the developer key against the API
    Status,
}

/// Subcommands for the `transactions` command.
#[derive(Subcommand)]
pub enum TransactionAction {
    /// Get a transaction by ID
    Get { id: u64 },
    /// List a user's transactions
    ListByUser {
        user_id: u64,
        #[command(flatten)]
        filters: TransactionFilterArgs,
    },
    /// List an account's transactions
    ListByAccount {
        account_id: u64,
        #[command(flatten)]
        filters: TransactionFilterArgs,
    },
    /// List transactions in one or more categories (comma-separated IDs)
    ListByCategory {
        #[arg(value_delimiter = ',', required = true)]
        category_ids: Vec<u64>,
        #[command(flatten)]
        filters: TransactionFilterArgs,
    },
    /// List a transaction account's transactions
    ListByTransactionAccount {
        transaction_account_id: u64,
        #[command(flatten)]
        filters: TransactionFilterArgs,
    },
    /// Create a transaction in a transaction account (write)
    Create {
        transaction_account_id: u64,
        #[command(flatten)]
        fields: TransactionFieldArgs,
    },
    /// Update a transaction; only the given fields change (write)
    Update {
        id: u64,
        #[command(flatten)]
        fields: TransactionFieldArgs,
    },
    /// Delete a transaction (write)
    Delete { id: u64 },
}

/// Subcommands for the `categories` command.
#[derive(Subcommand)]
pub enum CategoryAction {
    /// List a user's categories
    List { user_id: u64 },
    /// Get a category by ID
    Get { id: u64 },
    /// Create a category for a user (write)
    Create {
        user_id: u64,
        #[command(flatten)]
        fields: CategoryFieldArgs,
    },
    /// Update a category; only the given fields change (write)
    Update {
        id: u64,
        #[command(flatten)]
        fields: CategoryFieldArgs,
    },
    /// Delete a category (write)
    Delete { id: u64 },
}

#[derive(Subcommand)]
pub enum LabelAction {
    /// List a user's labels
    List { user_id: u64 },
}

/// Subcommands for the `attachments` command.
#[derive(Subcommand)]
pub enum AttachmentAction {
    /// Get an attachment by ID
    Get { id: u64 },
    /// List a user's attachments
    ListByUser { user_id: u64 },
    /// List attachments linked to a transaction
    ListByTransaction { transaction_id: u64 },
    /// Change an attachment's title (write)
    Update {
        id: u64,
        /// New title
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete an attachment (write)
    Delete { id: u64 },
    /// Link an existing attachment to a transaction (write)
    Assign {
        transaction_id: u64,
        attachment_id: u64,
    },
    /// Unlink an attachment from a transaction (write)
    Unassign {
        transaction_id: u64,
        attachment_id: u64,
    },
}

/// Subcommands for the `budget` command.
#[derive(Subcommand)]
pub enum BudgetAction {
    /// List a user's budget
    List {
        user_id: u64,
        /// Roll child categories up into their parents (true/false)
        #[arg(long)]
        roll_up: Option<bool>,
    },
    /// Summarize income and expenses over a period
    Summary {
        user_id: u64,
        #[command(flatten)]
        period: BudgetPeriodArgs,
    },
    /// Trend analysis for categories and scenarios
    Trend {
        user_id: u64,
        #[command(flatten)]
        period: BudgetPeriodArgs,
        /// Category IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        categories: Vec<u64>,
        /// Scenario IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        scenarios: Vec<u64>,
    },
    /// Clear the forecast cache so budgets are recalculated (write)
    Refresh { user_id: u64 },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
}

/// What a parsed command line asks for.
pub enum Invocation {
    /// A call against the API.
    Api(CommandDescriptor),
    /// `config show`, answered locally.
    ShowConfig,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Runs the parsed command and returns the process exit code.
pub async fn run(cli: Cli) -> u8 {
    let outcome = match cli.command.into_invocation() {
        Invocation::Api(descriptor) => execute(&descriptor).await,
        Invocation::ShowConfig => show_config(),
    };
    output::emit(outcome, &mut output::StdioRenderer)
}

/// Resolves credentials and config, then performs exactly one API call.
async fn execute(descriptor: &CommandDescriptor) -> Result<Value> {
    let credentials = credentials::resolve()?;
    let config = load_config()?;
    let transport = HttpTransport::new(&config.base_url)?;
    Client::new(transport, credentials, config.per_page)
        .execute(descriptor)
        .await
}

/// Effective configuration without revealing the developer key.
fn show_config() -> Result<Value> {
    let lookup = |name: &str| std::env::var(name).ok();
    let path = Config::config_path(lookup).map_err(config_error)?;
    let config = load_config()?;
    Ok(json!({
        "config_path": path.display().to_string(),
        "config_file_exists": path.exists(),
        "base_url": config.base_url,
        "per_page": config.per_page,
        "developer_key_set": credentials::resolve().is_ok(),
        "writes_allowed": credentials::writes_enabled(lookup),
    }))
}

fn load_config() -> Result<Config> {
    Config::load().map_err(config_error)
}

fn config_error(e: anyhow::Error) -> Error {
    Error::config(format!("{e:#}"))
}
