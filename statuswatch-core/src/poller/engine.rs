//! Poll cycle engine
//!
//! Drives fetch -> validate -> interpret -> notify -> sleep, forever. Every
//! failure is classified and contained to the cycle it occurred in; only
//! process termination from outside stops the loop.

use crate::api::{FetchError, StatusFetcher};
use crate::models::HomeworkRecord;
use crate::notify::Notifier;
use crate::poller::validation::{validate_response, ValidationError};
use crate::poller::verdict::{interpret, VerdictError, NO_NEWS_MESSAGE};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// A recoverable failure inside one poll cycle. The classification is total:
/// there is no residual error class that could escape the loop.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid response: {0}")]
    Validation(#[from] ValidationError),

    #[error("interpretation failed: {0}")]
    Verdict(#[from] VerdictError),
}

/// What one call to [`PollLoop::run_cycle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cycle reached delivery; the cursor advanced.
    Completed,
    /// A recoverable error aborted the cycle early; the cursor is unchanged.
    Recovered,
}

/// The poll-check-notify control loop. Sole owner of the cursor; fetch and
/// delivery clients are injected at construction.
pub struct PollLoop {
    fetcher: Arc<dyn StatusFetcher>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cursor: i64,
}

impl PollLoop {
    /// Create a loop starting from `initial_cursor` (usually "now").
    pub fn new(
        fetcher: Arc<dyn StatusFetcher>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        initial_cursor: i64,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            interval,
            cursor: initial_cursor,
        }
    }

    /// Watermark of the last successfully processed server timestamp.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run cycles forever. The sleep happens exactly once per cycle whatever
    /// the outcome; it is the only rate limit between us and the server.
    pub async fn run(&mut self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "poll loop started"
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run one fetch -> validate -> interpret -> notify cycle.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(new_cursor) => {
                // Monotonic watermark: a server value older than what we have
                // already processed never moves the cursor backwards.
                self.cursor = self.cursor.max(new_cursor);
                tracing::debug!(cursor = self.cursor, "cycle completed");
                CycleOutcome::Completed
            }
            Err(error) => {
                tracing::error!(error = %error, "poll cycle failed");
                self.notify_best_effort(&format!("Poller failure: {error}"))
                    .await;
                CycleOutcome::Recovered
            }
        }
    }

    async fn poll_once(&self) -> Result<i64, CycleError> {
        let raw = self.fetcher.fetch(self.cursor).await?;
        let response = validate_response(&raw)?;

        // Single-entry policy: only the newest record is reported.
        let message = match response.homeworks.first() {
            Some(entry) => {
                let record = HomeworkRecord::from_value(entry)?;
                interpret(&record)?
            }
            None => {
                tracing::debug!("no new statuses in the fetch window");
                NO_NEWS_MESSAGE.to_string()
            }
        };

        self.notify_best_effort(&message).await;
        Ok(response.current_date)
    }

    /// One delivery attempt. A failure is logged and goes no further; in
    /// particular it is never reported back through this same path.
    async fn notify_best_effort(&self, text: &str) {
        match self.notifier.notify(text).await {
            Ok(()) => {
                tracing::info!(sink = self.notifier.name(), "notification delivered");
            }
            Err(error) => {
                tracing::error!(
                    sink = self.notifier.name(),
                    error = %error,
                    "notification delivery failed"
                );
            }
        }
    }
}
