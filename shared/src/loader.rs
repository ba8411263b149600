use log::{debug, error};

use crate::api::FeedbackApi;
use crate::error::ApiError;
use crate::models::FeedbackRecord;

/// Handle for one in-flight list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Feedback List Loader state.
///
/// Fetches may overlap. Each `begin_fetch` supersedes the previous one, and only
/// the most recently issued request may replace the list or clear `loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackList {
    records: Vec<FeedbackRecord>,
    loading: bool,
    generation: u64,
}

impl Default for FeedbackList {
    fn default() -> Self {
        // The mount fetch is about to start, so render the loading state first
        Self {
            records: Vec::new(),
            loading: true,
            generation: 0,
        }
    }
}

impl FeedbackList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Apply the outcome of the request identified by `ticket`.
    /// Returns false if a newer request has been issued since.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<FeedbackRecord>, ApiError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Discarding feedback list response {} (latest request is {})",
                ticket.0, self.generation
            );
            return false;
        }

        match result {
            Ok(records) => {
                debug!("Loaded {} feedback entries", records.len());
                self.records = records;
            }
            Err(e) => {
                // The previous list stays on screen
                error!("Error fetching feedback: {}", e);
            }
        }

        self.loading = false;
        true
    }

    /// Fetch and apply in one step, for callers that own the state across the await
    pub async fn fetch<A: FeedbackApi + ?Sized>(&mut self, api: &A) -> bool {
        let ticket = self.begin_fetch();
        let result = api.list_feedback().await;
        self.complete(ticket, result)
    }
}
