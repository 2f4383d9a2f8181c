//! Poll-check-notify pipeline: response validation, verdict interpretation,
//! and the cycle engine

mod engine;
mod validation;
mod verdict;

pub use engine::{CycleError, CycleOutcome, PollLoop};
pub use validation::{validate_response, ValidationError};
pub use verdict::{interpret, verdict_for, VerdictError, NO_NEWS_MESSAGE};
