//! Wire data model for the review-status API

use serde::Deserialize;
use serde_json::Value;

/// One submission's last known review state at fetch time. Immutable once
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeworkRecord {
    /// Submission name as shown to the user
    pub name: String,
    /// Raw status value; mapped to a verdict by the interpreter
    pub status: String,
}

/// Shape-checked API response: newest-first homework list plus the server
/// cursor.
///
/// List entries stay raw JSON on purpose: record decoding happens at the
/// interpretation stage so that a malformed entry aborts the cycle as an
/// interpretation error, not a validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Homework entries, newest first
    pub homeworks: Vec<Value>,
    /// Server timestamp used as the lower bound of the next fetch
    pub current_date: i64,
}
