//! Application state definitions

use super::forms::LeadForm;
use super::submission::{Outcome, SubmissionPipeline};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    ThankYou,
    Failed,
}

impl View {
    /// Route name of the view
    pub fn route(&self) -> &'static str {
        match self {
            Self::Form => "/",
            Self::ThankYou => "/thankyou",
            Self::Failed => "/failed",
        }
    }

    /// Whether this view ends a form session
    pub fn is_outcome_view(&self) -> bool {
        matches!(self, Self::ThankYou | Self::Failed)
    }
}

impl From<Outcome> for View {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => View::ThankYou,
            Outcome::Failure => View::Failed,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form
    pub form: LeadForm,
    pub submission: SubmissionPipeline,

    // UI state
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Drop all form input and start over
    pub fn reset_form(&mut self) {
        self.form = LeadForm::new();
        self.submission = SubmissionPipeline::default();
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldName;

    #[test]
    fn test_default_view_is_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_outcome_maps_to_view() {
        assert_eq!(View::from(Outcome::Success), View::ThankYou);
        assert_eq!(View::from(Outcome::Failure), View::Failed);
    }

    #[test]
    fn test_view_routes() {
        assert_eq!(View::Form.route(), "/");
        assert_eq!(View::ThankYou.route(), "/thankyou");
        assert_eq!(View::Failed.route(), "/failed");
        assert!(!View::Form.is_outcome_view());
        assert!(View::Failed.is_outcome_view());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error();
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_reset_form_discards_input() {
        let mut state = AppState::default();
        state.form.update_field(FieldName::Name, "Asha");
        state.form.toggle_destination("US");
        state.status_message = Some("Submitting...".to_string());
        state.reset_form();
        assert!(state.form.name.is_empty());
        assert!(state.form.destinations().is_empty());
        assert!(state.status_message.is_none());
    }
}
