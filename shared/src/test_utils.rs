use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::api::FeedbackApi;
use crate::error::ApiError;
use crate::models::{FeedbackDraft, FeedbackRecord};

/// In-memory API double. Queued responses are served in order; when the
/// queue runs dry the list call returns `records` and the submit call succeeds.
#[derive(Default)]
pub struct MockFeedbackApi {
    pub records: RefCell<Vec<FeedbackRecord>>,
    pub list_responses: RefCell<VecDeque<Result<Vec<FeedbackRecord>, ApiError>>>,
    pub submit_responses: RefCell<VecDeque<Result<(), ApiError>>>,
    pub submitted: RefCell<Vec<FeedbackDraft>>,
    pub list_calls: Cell<usize>,
}

impl MockFeedbackApi {
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Self::default()
        }
    }

    pub fn queue_list(&self, response: Result<Vec<FeedbackRecord>, ApiError>) {
        self.list_responses.borrow_mut().push_back(response);
    }

    pub fn queue_submit(&self, response: Result<(), ApiError>) {
        self.submit_responses.borrow_mut().push_back(response);
    }
}

#[async_trait(?Send)]
impl FeedbackApi for MockFeedbackApi {
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        match self.list_responses.borrow_mut().pop_front() {
            Some(response) => response,
            None => Ok(self.records.borrow().clone()),
        }
    }

    async fn submit_feedback(&self, draft: &FeedbackDraft) -> Result<(), ApiError> {
        self.submitted.borrow_mut().push(draft.clone());
        let response = self.submit_responses.borrow_mut().pop_front().unwrap_or(Ok(()));
        if response.is_ok() {
            self.records.borrow_mut().push(FeedbackRecord {
                name: draft.name.clone(),
                email: draft.email.clone(),
                message: draft.message.clone(),
                timestamp: "2024-01-01T00:00:00Z".to_string(),
            });
        }
        response
    }
}

pub fn record(name: &str, message: &str) -> FeedbackRecord {
    FeedbackRecord {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        message: message.to_string(),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
    }
}
