//! Contact form submission lifecycle
//!
//! One submission at a time: the draft is snapshotted, handed to a
//! background task so the draw loop never blocks on the network, and the
//! result is drained through a channel on the next tick.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::state::ContactDraft;

use super::{FormRelay, RelayError};

/// Generic failure banner text. Remote rejection and transport faults are
/// deliberately indistinguishable to the user; logs keep the distinction.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again or email me directly.";

/// Result of a submission attempt, consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Success,
    Failure,
}

/// Owns the lifecycle of contact form submissions
pub struct ContactSubmitter {
    relay: Arc<dyn FormRelay>,
    outcome: SubmissionOutcome,
    error_message: Option<String>,
    tx: mpsc::UnboundedSender<Result<(), RelayError>>,
    rx: mpsc::UnboundedReceiver<Result<(), RelayError>>,
}

impl ContactSubmitter {
    pub fn new(relay: Arc<dyn FormRelay>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            relay,
            outcome: SubmissionOutcome::Idle,
            error_message: None,
            tx,
            rx,
        }
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.outcome == SubmissionOutcome::InFlight
    }

    /// Banner text for the last failure, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Start a submission. Returns false (and does nothing) while another
    /// submission is still in flight.
    pub fn begin(&mut self, draft: ContactDraft) -> bool {
        if self.is_in_flight() {
            return false;
        }

        self.outcome = SubmissionOutcome::InFlight;
        self.error_message = None;

        let relay = Arc::clone(&self.relay);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = relay.submit(&draft).await;
            // Receiver dropping means the app is shutting down
            let _ = tx.send(result);
        });

        true
    }

    /// Drain a completed submission, if any, and transition the outcome.
    ///
    /// Called once per event-loop tick. Returns the new terminal outcome
    /// when a submission just resolved.
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        match self.rx.try_recv() {
            Ok(Ok(())) => {
                self.outcome = SubmissionOutcome::Success;
                tracing::info!("contact form submission delivered");
                Some(SubmissionOutcome::Success)
            }
            Ok(Err(err)) => {
                match &err {
                    RelayError::MissingAccessKey => {
                        tracing::warn!("contact submission blocked: {err}");
                        self.error_message = Some(err.to_string());
                    }
                    RelayError::Rejected(_) => {
                        tracing::warn!("relay rejected contact submission: {err}");
                        self.error_message = Some(GENERIC_FAILURE.to_string());
                    }
                    RelayError::Transport(_) => {
                        tracing::warn!("contact submission transport failure: {err}");
                        self.error_message = Some(GENERIC_FAILURE.to_string());
                    }
                }
                self.outcome = SubmissionOutcome::Failure;
                Some(SubmissionOutcome::Failure)
            }
            Err(_) => None,
        }
    }

    /// Any edit after a terminal outcome returns the banner to idle, so a
    /// stale Success or Failure never lingers over a changed draft.
    pub fn reset_on_edit(&mut self) {
        if matches!(
            self.outcome,
            SubmissionOutcome::Success | SubmissionOutcome::Failure
        ) {
            self.outcome = SubmissionOutcome::Idle;
            self.error_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockFormRelay;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    /// Drive the event-loop polling until the submission resolves
    async fn wait_for_resolution(submitter: &mut ContactSubmitter) -> SubmissionOutcome {
        for _ in 0..1000 {
            if let Some(outcome) = submitter.poll() {
                return outcome;
            }
            tokio::task::yield_now().await;
        }
        panic!("submission never resolved");
    }

    /// Relay that holds every submission until released, for in-flight tests
    struct GatedRelay {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl FormRelay for GatedRelay {
        async fn submit(&self, _draft: &ContactDraft) -> Result<(), RelayError> {
            self.gate.notified().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_successful_submission_reaches_success() {
        let mut mock = MockFormRelay::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));
        assert_eq!(submitter.outcome(), SubmissionOutcome::Idle);

        assert!(submitter.begin(draft()));
        assert!(submitter.is_in_flight());

        let outcome = wait_for_resolution(&mut submitter).await;
        assert_eq!(outcome, SubmissionOutcome::Success);
        assert!(submitter.error_message().is_none());
    }

    #[tokio::test]
    async fn test_rejected_submission_reaches_failure_with_generic_banner() {
        let mut mock = MockFormRelay::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(RelayError::Rejected("invalid key".to_string())));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));
        assert!(submitter.begin(draft()));

        let outcome = wait_for_resolution(&mut submitter).await;
        assert_eq!(outcome, SubmissionOutcome::Failure);
        assert_eq!(submitter.error_message(), Some(GENERIC_FAILURE));
    }

    #[tokio::test]
    async fn test_transport_failure_is_indistinguishable_from_rejection() {
        let mut mock = MockFormRelay::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(RelayError::Transport("connection reset".to_string())));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));
        assert!(submitter.begin(draft()));

        let outcome = wait_for_resolution(&mut submitter).await;
        assert_eq!(outcome, SubmissionOutcome::Failure);
        // Same banner as an explicit rejection
        assert_eq!(submitter.error_message(), Some(GENERIC_FAILURE));
    }

    #[tokio::test]
    async fn test_missing_key_failure_keeps_specific_banner() {
        let mut mock = MockFormRelay::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(RelayError::MissingAccessKey));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));
        assert!(submitter.begin(draft()));

        let outcome = wait_for_resolution(&mut submitter).await;
        assert_eq!(outcome, SubmissionOutcome::Failure);
        assert!(submitter
            .error_message()
            .unwrap()
            .contains("WEB3FORMS_ACCESS_KEY"));
    }

    #[tokio::test]
    async fn test_reentrant_begin_is_refused_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let relay = GatedRelay {
            gate: Arc::clone(&gate),
        };

        let mut submitter = ContactSubmitter::new(Arc::new(relay));
        assert!(submitter.begin(draft()));
        assert!(submitter.is_in_flight());

        // Second submit while the first is pending must be ignored
        assert!(!submitter.begin(draft()));

        gate.notify_one();
        let outcome = wait_for_resolution(&mut submitter).await;
        assert_eq!(outcome, SubmissionOutcome::Success);
    }

    #[tokio::test]
    async fn test_failure_then_retry_has_no_stale_in_flight_state() {
        let mut mock = MockFormRelay::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RelayError::Rejected(String::new())));
        mock.expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));

        assert!(submitter.begin(draft()));
        assert_eq!(
            wait_for_resolution(&mut submitter).await,
            SubmissionOutcome::Failure
        );

        // Retry must be accepted immediately after resolution
        assert!(submitter.begin(draft()));
        assert_eq!(
            wait_for_resolution(&mut submitter).await,
            SubmissionOutcome::Success
        );
        assert!(submitter.error_message().is_none());
    }

    #[tokio::test]
    async fn test_reset_on_edit_clears_terminal_outcomes() {
        let mut mock = MockFormRelay::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(RelayError::Rejected(String::new())));

        let mut submitter = ContactSubmitter::new(Arc::new(mock));
        assert!(submitter.begin(draft()));
        wait_for_resolution(&mut submitter).await;

        submitter.reset_on_edit();
        assert_eq!(submitter.outcome(), SubmissionOutcome::Idle);
        assert!(submitter.error_message().is_none());
    }

    #[tokio::test]
    async fn test_reset_on_edit_does_not_cancel_in_flight() {
        let gate = Arc::new(Notify::new());
        let relay = GatedRelay {
            gate: Arc::clone(&gate),
        };

        let mut submitter = ContactSubmitter::new(Arc::new(relay));
        assert!(submitter.begin(draft()));

        submitter.reset_on_edit();
        assert!(submitter.is_in_flight());

        gate.notify_one();
        wait_for_resolution(&mut submitter).await;
    }
}
