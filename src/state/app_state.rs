//! Application state definitions

use super::forms::FormState;
use crate::feedback::{FormSession, Step, ValidationErrors};
use std::collections::{BTreeMap, VecDeque};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Welcome banner with the start button
    #[default]
    Banner,
    Showroom,
    CustomerNumber,
    CustomerDetails,
    /// Confirmation after the last step
    ThankYou,
}

impl View {
    /// The view that presents `session`
    pub fn for_session(session: &FormSession) -> Self {
        if session.is_complete() {
            return View::ThankYou;
        }
        match session.current_step() {
            Step::Banner => View::Banner,
            Step::Showroom => View::Showroom,
            Step::CustomerNumber => View::CustomerNumber,
            Step::CustomerDetails => View::CustomerDetails,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Inputs of the step being filled in
    pub form: FormState,
    /// Validation messages from the last rejected submit, by field name
    pub field_errors: BTreeMap<String, String>,
    /// Errors waiting to be shown in the error dialog, oldest first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Point the view and form at the session's current step.
    ///
    /// The form is only rebuilt when the view actually changes.
    pub fn sync_with(&mut self, session: &FormSession) {
        let view = View::for_session(session);
        if view != self.current_view {
            self.current_view = view;
            self.form = if view == View::ThankYou {
                FormState::None
            } else {
                FormState::for_step(session.current_step())
            };
            self.field_errors.clear();
        }
    }

    pub fn set_field_errors(&mut self, errors: &ValidationErrors) {
        self.field_errors = errors
            .iter()
            .map(|e| (e.field.clone(), e.message.clone()))
            .collect();
    }

    pub fn clear_field_errors(&mut self) {
        self.field_errors.clear();
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the current error, revealing the next one if any
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
