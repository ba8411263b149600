use std::collections::BTreeMap;

use crate::models::{FeedbackDraft, FeedbackField};
use crate::validation::validate;

/// Per-field error text. A missing entry and an empty string both mean valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FeedbackField, String>,
}

impl ErrorMap {
    /// Run the validator over every field of `draft`
    pub fn for_draft(draft: &FeedbackDraft) -> Self {
        let entries = FeedbackField::ALL
            .iter()
            .map(|field| (*field, validate(*field, draft.get(*field))))
            .collect();
        Self { entries }
    }

    pub fn get(&self, field: FeedbackField) -> &str {
        self.entries.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FeedbackField, error: String) {
        self.entries.insert(field, error);
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|error| !error.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Form State Holder: the draft plus its error map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    draft: FeedbackDraft,
    errors: ErrorMap,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Store a keystroke's worth of input and revalidate that field only
    pub fn change(&mut self, field: FeedbackField, value: impl Into<String>) {
        let value = value.into();
        let error = validate(field, &value);
        self.draft.set(field, value);
        self.errors.set(field, error);
    }

    /// Replace the error map with a full validation pass.
    /// Returns true when every field is valid.
    pub fn validate_all(&mut self) -> bool {
        self.errors = ErrorMap::for_draft(&self.draft);
        !self.errors.has_errors()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.errors.has_errors() || self.draft.has_empty_field()
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.errors.clear();
    }
}
