//! Bulk-import validation for externally supplied client lists.
//!
//! Backup files are plain JSON arrays with no schema tag, so every record is
//! checked structurally, field by field. Content problems never abort the
//! run; they are collected per record so the operator can decide whether to
//! proceed with the valid subset. Only a payload that is not an array at the
//! top level is fatal.

use log::warn;
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::models::client::{Client, Status};

/// Structural failure of the whole import attempt. There is no partial
/// result in this case; the caller aborts with no accepted records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("the file does not contain a list (array) of clients")]
    MalformedInput,
}

/// One record that failed validation, with everything the operator needs to
/// find and fix it in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// 1-based line number in the input array, for operator display.
    pub line: usize,
    /// The record's `name` when it carries one, `"unknown"` otherwise.
    pub identifier: String,
    /// Every rule the record violated, not just the first.
    pub reasons: Vec<String>,
}

impl RejectedRecord {
    /// One-line summary for the confirmation prompt.
    pub fn display(&self) -> String {
        format!(
            "Client #{} ({}): {}.",
            self.line,
            self.identifier,
            self.reasons.join(", ")
        )
    }
}

/// Accept/reject partition of one import payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub accepted: Vec<Client>,
    pub rejected: Vec<RejectedRecord>,
}

/// Validate an arbitrary JSON payload against the client schema.
///
/// `known_plan_names` is a read-only snapshot of the current catalog. Plan
/// membership is deliberately not enforced: a client on an archived plan is
/// historical data worth keeping, so an unknown plan name is accepted and
/// only logged.
pub fn reconcile(
    raw: &Value,
    known_plan_names: &HashSet<String>,
) -> Result<ImportOutcome, ImportError> {
    let items = raw.as_array().ok_or(ImportError::MalformedInput)?;

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let line = index + 1;
        let record = match item.as_object() {
            Some(record) => record,
            None => {
                rejected.push(RejectedRecord {
                    line,
                    identifier: "unknown".to_string(),
                    reasons: vec!["not a valid client record".to_string()],
                });
                continue;
            }
        };

        match validate_record(record) {
            Ok(client) => {
                if !known_plan_names.contains(&client.plan) {
                    warn!(
                        "Imported client '{}' references unknown plan '{}' (kept as archived plan)",
                        client.name, client.plan
                    );
                }
                accepted.push(client);
            }
            Err(reasons) => rejected.push(RejectedRecord {
                line,
                identifier: record_identifier(record),
                reasons,
            }),
        }
    }

    Ok(ImportOutcome { accepted, rejected })
}

/// Check every field rule independently and accumulate all violations.
/// A record passes only with zero violations.
fn validate_record(record: &Map<String, Value>) -> Result<Client, Vec<String>> {
    let mut reasons = Vec::new();

    let id = non_empty_string(record.get("id"));
    if id.is_none() {
        reasons.push("missing or invalid ID".to_string());
    }

    let name = non_empty_string(record.get("name"));
    if name.is_none() {
        reasons.push("missing or invalid name".to_string());
    }

    let monthly_value = record.get("monthlyValue").and_then(Value::as_f64);
    if monthly_value.is_none() {
        reasons.push("missing or invalid monthly value".to_string());
    }

    let due_date = record
        .get("dueDate")
        .and_then(Value::as_f64)
        .filter(|day| (1.0..=31.0).contains(day));
    if due_date.is_none() {
        reasons.push("due date must be a number between 1 and 31".to_string());
    }

    let plan = non_empty_string(record.get("plan"));
    if plan.is_none() {
        reasons.push("invalid plan".to_string());
    }

    let status = record
        .get("status")
        .and_then(Value::as_str)
        .and_then(Status::from_literal);
    if status.is_none() {
        let shown = match record.get("status") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(value) if !value.is_null() && !value.is_string() => value.to_string(),
            _ => "undefined".to_string(),
        };
        reasons.push(format!("status '{}' is invalid", shown));
    }

    match (id, name, monthly_value, due_date, plan, status) {
        (Some(id), Some(name), Some(monthly_value), Some(due_date), Some(plan), Some(status)) => {
            Ok(Client {
                id,
                name,
                contact: record
                    .get("contact")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                plan,
                monthly_value,
                due_date: due_date as u32,
                status,
            })
        }
        _ => Err(reasons),
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn record_identifier(record: &Map<String, Value>) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
