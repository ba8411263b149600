pub mod feedback_form;
pub mod feedback_list;
pub mod form_field;

pub use feedback_form::FeedbackForm;
pub use feedback_list::FeedbackListView;
pub use form_field::FormField;
