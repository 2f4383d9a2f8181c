//! Response shape validation
//!
//! Checks the decoded API response before anything downstream touches it.
//! List entries stay raw: record-level decoding belongs to the interpretation
//! stage, so validation rules here are top-level only.

use crate::models::StatusResponse;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during response validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("`homeworks` is not a list")]
    HomeworksNotAList,

    #[error("`current_date` is not an integer timestamp")]
    BadCursor,
}

/// Validate the decoded API response shape. Pure function of its input.
pub fn validate_response(response: &Value) -> Result<StatusResponse, ValidationError> {
    let object = response.as_object().ok_or(ValidationError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ValidationError::MissingField("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(ValidationError::MissingField("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or(ValidationError::HomeworksNotAList)?;
    let current_date = current_date.as_i64().ok_or(ValidationError::BadCursor)?;

    Ok(StatusResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
