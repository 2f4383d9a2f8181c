//! Status API access: fetch capability and its error classification

mod http;

pub use http::HttpStatusFetcher;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching the status feed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status.
    #[error("server returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Fetch capability for the review-status feed. One call per poll cycle.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    /// Fetch raw status data for everything newer than `from_date`.
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}
