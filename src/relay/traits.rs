//! Trait abstraction for the form relay to enable mocking in tests

use crate::state::ContactDraft;
use async_trait::async_trait;

use super::RelayError;

/// Trait for form relay operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver one contact form draft to the relay service.
    ///
    /// Must perform zero network calls when the access credential is
    /// missing, failing fast with [`RelayError::MissingAccessKey`].
    async fn submit(&self, draft: &ContactDraft) -> Result<(), RelayError>;
}
