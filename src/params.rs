//! Translation of filter options into the API's query-string schema.
//!
//! [`build`] is a pure function: it validates dates and ranges, drops absent
//! values, and emits pairs in a fixed key order so identical filters always
//! produce identical requests.

use chrono::{DateTime, NaiveDate};

use crate::command::Filters;
use crate::constants::{DEFAULT_PAGE, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::error::{Error, Result};

/// Ordered query pairs, ready for the transport.
pub type Query = Vec<(&'static str, String)>;

/// Whether an endpoint pages its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Page parameters are never sent.
    Off,
    /// Page parameters are always sent, filling omitted values with defaults.
    On { default_per_page: u32 },
}

/// Builds the query for `filters`.
pub fn build(filters: &Filters, paging: Paging) -> Result<Query> {
    let mut query = Query::new();

    if let Some(period) = filters.period {
        query.push(("period", period.as_str().to_string()));
    }
    if let Some(interval) = filters.interval {
        if interval == 0 {
            return Err(Error::validation("interval must be at least 1"));
        }
        query.push(("interval", interval.to_string()));
    }

    let start = filters
        .start_date
        .as_deref()
        .map(|raw| parse_date("start date", raw))
        .transpose()?;
    let end = filters
        .end_date
        .as_deref()
        .map(|raw| parse_date("end date", raw))
        .transpose()?;
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(Error::validation(format!(
                "end date {end} is before start date {start}"
            )));
        }
    }
    if let Some(start) = start {
        query.push(("start_date", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = end {
        query.push(("end_date", end.format("%Y-%m-%d").to_string()));
    }
    if let Some(raw) = filters.updated_since.as_deref() {
        validate_timestamp(raw)?;
        query.push(("updated_since", raw.trim().to_string()));
    }

    if filters.uncategorised {
        query.push(("uncategorised", "1".to_string()));
    }
    if let Some(kind) = filters.transaction_type {
        query.push(("type", kind.as_str().to_string()));
    }
    if filters.needs_review {
        query.push(("needs_review", "1".to_string()));
    }
    if let Some(search) = filters.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
    }
    if !filters.categories.is_empty() {
        query.push(("categories", join_ids(&filters.categories)));
    }
    if !filters.scenarios.is_empty() {
        query.push(("scenarios", join_ids(&filters.scenarios)));
    }
    if let Some(roll_up) = filters.roll_up {
        query.push(("roll_up", if roll_up { "1" } else { "0" }.to_string()));
    }

    if let Paging::On { default_per_page } = paging {
        let page = filters.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(Error::validation("page must be at least 1"));
        }
        let per_page = filters.per_page.unwrap_or(default_per_page);
        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&per_page) {
            return Err(Error::validation(format!(
                "per-page must be between {MIN_PER_PAGE} and {MAX_PER_PAGE}, got {per_page}"
            )));
        }
        query.push(("page", page.to_string()));
        query.push(("per_page", per_page.to_string()));
    }

    Ok(query)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(label: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        Error::validation(format!("invalid {label} '{raw}': expected YYYY-MM-DD"))
    })
}

/// Accepts an RFC 3339 timestamp or a bare calendar date.
fn validate_timestamp(raw: &str) -> Result<()> {
    let trimmed = raw.trim();
    if DateTime::parse_from_rfc3339(trimmed).is_ok()
        || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok()
    {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "invalid updated-since '{raw}': expected an RFC 3339 timestamp or YYYY-MM-DD"
        )))
    }
}

/// Comma-joins ids, as the API expects for multi-id parameters and paths.
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
