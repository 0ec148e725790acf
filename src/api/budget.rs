//! Budgets, budget summaries and trend analysis.

use serde_json::Value;

use super::{deleted, Client};
use crate::command::{Filters, Verb};
use crate::error::{Error, Result};
use crate::params::{self, Paging};
use crate::transport::{RemoteRequest, Transport};

impl<T: Transport> Client<T> {
    /// Per-category budgets. `roll_up` is only sent when the filter sets it.
    pub async fn list_budget(&self, user_id: u64, filters: &Filters) -> Result<Value> {
        let query = params::build(filters, Paging::Off)?;
        self.read(RemoteRequest::get(format!("/users/{user_id}/budget")).with_query(query))
            .await
    }

    /// Income and expense totals across all categories for a period.
    pub async fn budget_summary(&self, user_id: u64, filters: &Filters) -> Result<Value> {
        require_period(filters, false)?;
        let query = params::build(filters, Paging::Off)?;
        self.read(RemoteRequest::get(format!("/users/{user_id}/budget_summary")).with_query(query))
            .await
    }

    /// Per-category trend for the given categories and scenarios.
    pub async fn budget_trend(&self, user_id: u64, filters: &Filters) -> Result<Value> {
        require_period(filters, true)?;
        let query = params::build(filters, Paging::Off)?;
        self.read(RemoteRequest::get(format!("/users/{user_id}/trend_analysis")).with_query(query))
            .await
    }

    /// Clears the server-side forecast cache so budgets are recalculated.
    pub async fn refresh_forecast(&self, user_id: u64) -> Result<Value> {
        self.write(Verb::Refresh, || {
            Ok(RemoteRequest::delete(format!("/users/{user_id}/forecast_cache")))
        })
        .await?;
        Ok(deleted(format!("Forecast cache cleared for user {user_id}")))
    }
}

fn require_period(filters: &Filters, trend: bool) -> Result<()> {
    let mut missing = Vec::new();
    if filters.period.is_none() {
        missing.push("--period");
    }
    if filters.interval.is_none() {
        missing.push("--interval");
    }
    if filters.start_date.is_none() {
        missing.push("--start-date");
    }
    if filters.end_date.is_none() {
        missing.push("--end-date");
    }
    if trend && filters.categories.is_empty() {
        missing.push("--categories");
    }
    if trend && filters.scenarios.is_empty() {
        missing.push("--scenarios");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "missing required options: {}",
            missing.join(", ")
        )))
    }
}
