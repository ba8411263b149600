use log::{debug, error};

use crate::api::FeedbackApi;
use crate::error::ApiError;
use crate::form::FeedbackForm;
use crate::models::{FeedbackDraft, FeedbackFormConfig};

/// Where the Submission Controller is in its workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// The API accepted the feedback. Dismiss the banner with `dismiss_token`
    /// once the display window has passed.
    Succeeded { dismiss_token: u64 },
    /// The API rejected the feedback or could not be reached
    Failed { alert: String, error: ApiError },
}

impl SubmissionOutcome {
    /// Whether the feedback list should be fetched again
    pub fn should_refresh(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded { .. })
    }
}

/// Transient success message. Every `show` issues a new token, and only the
/// latest token can dismiss the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessBanner {
    message: Option<String>,
    token: u64,
}

impl SuccessBanner {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.token += 1;
        self.message = Some(message.into());
        self.token
    }

    pub fn dismiss(&mut self, token: u64) -> bool {
        if token != self.token {
            return false;
        }
        self.message = None;
        true
    }

    /// The message to display, empty when hidden
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Submission Controller: validates, posts and resets the form.
///
/// The workflow is split into [`begin`](Self::begin) and [`finish`](Self::finish)
/// so the UI can release its borrows while the POST is in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
    banner: SuccessBanner,
    config: FeedbackFormConfig,
}

impl SubmissionController {
    pub fn new(config: FeedbackFormConfig) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            banner: SuccessBanner::default(),
            config,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn config(&self) -> &FeedbackFormConfig {
        &self.config
    }

    pub fn success_message(&self) -> &str {
        self.banner.message()
    }

    /// Hide the success message if `token` is still the latest one
    pub fn dismiss_success(&mut self, token: u64) -> bool {
        self.banner.dismiss(token)
    }

    /// Run full validation. Returns the body to POST, or `None` if any field
    /// is invalid (the form's error map then shows why).
    pub fn begin(&mut self, form: &mut FeedbackForm) -> Option<FeedbackDraft> {
        self.transition(SubmissionPhase::Validating);

        if !form.validate_all() {
            self.transition(SubmissionPhase::Idle);
            return None;
        }

        self.transition(SubmissionPhase::Submitting);
        Some(form.draft().clone())
    }

    /// Apply the API's answer to a request produced by [`begin`](Self::begin)
    pub fn finish(&mut self, form: &mut FeedbackForm, result: Result<(), ApiError>) -> SubmissionOutcome {
        let outcome = match result {
            Ok(()) => {
                self.transition(SubmissionPhase::Succeeded);
                form.reset();
                let dismiss_token = self.banner.show(self.config.success_message.clone());
                SubmissionOutcome::Succeeded { dismiss_token }
            }
            Err(e) => {
                self.transition(SubmissionPhase::Failed);
                error!("Error submitting feedback: {}", e.log_message());
                SubmissionOutcome::Failed {
                    alert: self.config.failure_alert.clone(),
                    error: e,
                }
            }
        };

        self.transition(SubmissionPhase::Idle);
        outcome
    }

    /// Validate, POST and apply the result in one step
    pub async fn submit<A: FeedbackApi + ?Sized>(&mut self, form: &mut FeedbackForm, api: &A) -> SubmissionOutcome {
        let Some(draft) = self.begin(form) else {
            return SubmissionOutcome::Invalid;
        };

        let result = api.submit_feedback(&draft).await;
        self.finish(form, result)
    }

    fn transition(&mut self, next: SubmissionPhase) {
        debug!("Submission {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::FeedbackList;
    use crate::models::{FeedbackField, SUCCESS_MESSAGE};
    use crate::test_utils::MockFeedbackApi;

    fn form_with(name: &str, email: &str, message: &str) -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.change(FeedbackField::Name, name);
        form.change(FeedbackField::Email, email);
        form.change(FeedbackField::Message, message);
        form
    }

    #[tokio::test]
    async fn test_successful_submission_resets_and_refreshes() {
        let api = MockFeedbackApi::default();
        let mut list = FeedbackList::new();
        list.fetch(&api).await;

        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let outcome = controller.submit(&mut form, &api).await;
        assert!(matches!(outcome, SubmissionOutcome::Succeeded { .. }));
        assert!(outcome.should_refresh());

        // Exactly the entered values were posted
        {
            let submitted = api.submitted.borrow();
            assert_eq!(submitted.len(), 1);
            assert_eq!(
                serde_json::to_value(&submitted[0]).unwrap(),
                serde_json::json!({
                    "name": "John Doe",
                    "email": "john@example.com",
                    "message": "Great service, thank you!"
                })
            );
        }

        assert_eq!(form.draft(), &FeedbackDraft::default());
        assert!(form.errors().is_empty());
        assert_eq!(controller.success_message(), SUCCESS_MESSAGE);
        assert_eq!(controller.phase(), SubmissionPhase::Idle);

        list.fetch(&api).await;
        assert_eq!(api.list_calls.get(), 2);
        assert_eq!(list.records().len(), 1);
        assert_eq!(list.records()[0].name, "John Doe");
    }

    #[tokio::test]
    async fn test_invalid_name_blocks_post() {
        let api = MockFeedbackApi::default();
        let mut form = form_with("J0hn", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let outcome = controller.submit(&mut form, &api).await;

        assert_eq!(outcome, SubmissionOutcome::Invalid);
        assert!(!outcome.should_refresh());
        assert!(api.submitted.borrow().is_empty());
        assert_eq!(form.errors().get(FeedbackField::Name), "Name must only contain letters and spaces");
        assert!(form.is_submit_disabled());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_server_error_keeps_draft() {
        let api = MockFeedbackApi::default();
        api.queue_submit(Err(ApiError::Server {
            status: 500,
            message: "db down".to_string(),
        }));
        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let outcome = controller.submit(&mut form, &api).await;

        match outcome {
            SubmissionOutcome::Failed { alert, error } => {
                assert_eq!(alert, "Error submitting feedback");
                assert_eq!(error.log_message(), "db down");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(form.draft().name, "John Doe");
        assert_eq!(form.draft().email, "john@example.com");
        assert_eq!(form.draft().message, "Great service, thank you!");
        assert_eq!(controller.success_message(), "");
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_network_error_is_a_failure() {
        let api = MockFeedbackApi::default();
        api.queue_submit(Err(ApiError::Network("connection refused".to_string())));
        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let outcome = controller.submit(&mut form, &api).await;

        assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
        assert!(!outcome.should_refresh());
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let draft = controller.begin(&mut form);
        assert_eq!(draft.as_ref().map(|d| d.name.as_str()), Some("John Doe"));
        assert_eq!(controller.phase(), SubmissionPhase::Submitting);

        controller.finish(&mut form, Ok(()));
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_begin_revalidates_stale_error_map() {
        // The message field was never touched, so only the submit-time pass flags it
        let mut form = FeedbackForm::new();
        form.change(FeedbackField::Name, "John Doe");
        form.change(FeedbackField::Email, "john@example.com");
        let mut controller = SubmissionController::default();

        assert!(controller.begin(&mut form).is_none());
        assert_eq!(form.errors().get(FeedbackField::Message), "Feedback message cannot be empty");
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_banner() {
        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");
        let mut controller = SubmissionController::default();

        let first = match controller.finish(&mut form, Ok(())) {
            SubmissionOutcome::Succeeded { dismiss_token } => dismiss_token,
            other => panic!("expected success, got {:?}", other),
        };
        let second = match controller.finish(&mut form, Ok(())) {
            SubmissionOutcome::Succeeded { dismiss_token } => dismiss_token,
            other => panic!("expected success, got {:?}", other),
        };

        // The first submission's timer fires while the second banner is up
        assert!(!controller.dismiss_success(first));
        assert_eq!(controller.success_message(), SUCCESS_MESSAGE);

        assert!(controller.dismiss_success(second));
        assert_eq!(controller.success_message(), "");
    }

    #[test]
    fn test_custom_config_texts() {
        let config = FeedbackFormConfig {
            success_message: "Thanks!".to_string(),
            failure_alert: "Nope".to_string(),
            success_message_duration_ms: 500,
        };
        let mut controller = SubmissionController::new(config);
        let mut form = form_with("John Doe", "john@example.com", "Great service, thank you!");

        controller.finish(&mut form, Ok(()));
        assert_eq!(controller.success_message(), "Thanks!");

        let outcome = controller.finish(&mut form, Err(ApiError::Decode("eof".to_string())));
        assert!(matches!(outcome, SubmissionOutcome::Failed { ref alert, .. } if alert == "Nope"));
        assert_eq!(controller.config().success_message_duration_ms, 500);
    }
}
