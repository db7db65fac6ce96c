//! Form relay integration
//!
//! The contact form is delivered through a hosted form relay (Web3Forms),
//! so the portfolio needs no backend of its own. This module owns the
//! relay client, the trait seam used for testing, and the submission
//! lifecycle state machine.

mod client;
mod submitter;
mod traits;

pub use client::Web3FormsClient;
pub use submitter::{ContactSubmitter, SubmissionOutcome};
pub use traits::FormRelay;

#[cfg(test)]
pub use traits::MockFormRelay;

use thiserror::Error;

/// Errors from a contact form submission attempt.
///
/// The UI collapses `Rejected` and `Transport` into one generic failure
/// banner; the distinction is kept here for logging.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("no relay access key configured; set WEB3FORMS_ACCESS_KEY or add access_key to the config file")]
    MissingAccessKey,
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
}
