//! Verdict interpretation: map a homework record to its human-readable message

use crate::models::HomeworkRecord;
use serde_json::Value;
use thiserror::Error;

/// Message used when the fetch window contains no homework at all.
pub const NO_NEWS_MESSAGE: &str = "No new statuses.";

/// Errors that can occur while interpreting a homework record
#[derive(Debug, Error)]
pub enum VerdictError {
    /// Status value is not in the verdict table.
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    /// Entry is missing required fields or carries the wrong types.
    #[error("malformed homework record: {0}")]
    Malformed(String),
}

/// Fixed verdict text for a recognized status. Exactly three keys; anything
/// else is an error, not a fallback.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Reviewed: the reviewer liked everything. Hooray!"),
        "reviewing" => Some("The work was taken up for review."),
        "rejected" => Some("Reviewed: the reviewer has remarks."),
        _ => None,
    }
}

impl HomeworkRecord {
    /// Decode one raw list entry. Shape defects at the record level classify
    /// as interpretation errors.
    pub fn from_value(value: &Value) -> Result<Self, VerdictError> {
        serde_json::from_value(value.clone()).map_err(|error| VerdictError::Malformed(error.to_string()))
    }
}

/// Build the notification message for one record.
pub fn interpret(record: &HomeworkRecord) -> Result<String, VerdictError> {
    let verdict = verdict_for(&record.status)
        .ok_or_else(|| VerdictError::UnknownStatus(record.status.clone()))?;
    Ok(format!(
        "Review status changed for \"{}\". {}",
        record.name, verdict
    ))
}
