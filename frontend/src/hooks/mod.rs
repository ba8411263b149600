pub mod use_feedback_form;
pub mod use_feedback_list;
