//! Outbound notification delivery

mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while delivering a notification
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Request could not be sent or the connection failed.
    #[error("delivery request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Messaging API answered with a non-success HTTP status.
    #[error("messaging api error {status}: {body}")]
    Api { status: u16, body: String },
}

/// Sink for delivering a text message to the configured chat. One attempt per
/// call; the caller decides what a failure means.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Provider name for logging (e.g. "telegram").
    fn name(&self) -> &str;

    /// Deliver `text` to the configured recipient.
    async fn notify(&self, text: &str) -> Result<(), DeliveryError>;
}
