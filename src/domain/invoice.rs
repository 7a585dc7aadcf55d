// src/domain/invoice.rs

use crate::errors::ValidationError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// A worker invoice as entered in the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub worker: String,
    pub concept: String,
    pub amount_cents: i64,
    pub issued_on: NaiveDate,
}

impl NewInvoice {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let field = |name: &str| form.get(name).map(|v| v.trim()).unwrap_or("");

        let worker = field("worker");
        if worker.is_empty() {
            return Err(ValidationError::Missing { field: "worker" });
        }

        let issued_on = match field("issued_on") {
            "" => return Err(ValidationError::Missing { field: "issued_on" }),
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                ValidationError::Invalid {
                    field: "issued_on",
                    reason: format!("{raw:?}: {e}"),
                }
            })?,
        };

        Ok(Self {
            worker: worker.to_string(),
            concept: field("concept").to_string(),
            amount_cents: parse_amount_cents(field("amount"))?,
            issued_on,
        })
    }
}

/// Parses "123", "123.4" or "123.45" (comma also accepted) into cents.
pub fn parse_amount_cents(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field: "amount" });
    }

    let invalid = |reason: &str| ValidationError::Invalid {
        field: "amount",
        reason: format!("{raw:?} {reason}"),
    };

    let normalized = raw.replace(',', ".");
    let (units, fraction) = match normalized.split_once('.') {
        Some((u, f)) => (u, f),
        None => (normalized.as_str(), ""),
    };

    if units.is_empty() || !units.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("is not a positive amount"));
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("must have at most two decimals"));
    }

    let units: i64 = units.parse().map_err(|_| invalid("is too large"))?;
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid("is malformed"))? * 10,
        _ => fraction.parse().map_err(|_| invalid("is malformed"))?,
    };

    units
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(|| invalid("is too large"))
}

pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// A stored invoice.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: i64,
    pub worker: String,
    pub concept: String,
    pub amount_cents: i64,
    pub issued_on: NaiveDate,
    pub paid: bool,
}
