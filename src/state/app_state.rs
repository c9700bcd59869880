//! Application state definitions

use super::forms::{ContactForm, ContactSubmission};
use super::toast::{Toast, ToastSeverity};

pub const SUCCESS_TOAST_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_TOAST_DESCRIPTION: &str = "We'll get back to you as soon as possible.";
pub const FAILURE_TOAST_TITLE: &str = "Failed to send message";
pub const FAILURE_TOAST_DESCRIPTION: &str = "Please try again later or contact us directly.";

/// Outcome of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    /// True between submit initiation and delivery resolution
    pub is_submitting: bool,
    pub toast: Option<Toast>,
}

impl AppState {
    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.form.is_ready() && !self.is_submitting
    }

    /// Enter the submitting state and take the snapshot to deliver
    pub fn begin_submission(&mut self) -> ContactSubmission {
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        self.form.snapshot()
    }

    /// Apply a delivery outcome; the submitting flag is always cleared
    pub fn finish_submission(&mut self, delivered: bool) {
        if delivered {
            self.status = SubmitStatus::Success;
            self.toast = Some(Toast::new(
                SUCCESS_TOAST_TITLE,
                SUCCESS_TOAST_DESCRIPTION,
                ToastSeverity::Default,
            ));
            self.form.clear();
            self.form.active_field_index = 0;
        } else {
            self.status = SubmitStatus::Error;
            self.toast = Some(Toast::new(
                FAILURE_TOAST_TITLE,
                FAILURE_TOAST_DESCRIPTION,
                ToastSeverity::Destructive,
            ));
        }
        self.is_submitting = false;
    }

    /// Drop the toast once its display time has passed
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        state.form.set_field(FieldKind::Name, "Ana");
        state.form.set_field(FieldKind::Email, "ana@x.com");
        state.form.set_field(FieldKind::Subject, "Hi");
        state.form.set_field(FieldKind::Message, "Hello");
        state
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert!(!state.is_submitting);
        assert!(state.toast.is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_can_submit_requires_all_fields() {
        let mut state = filled_state();
        assert!(state.can_submit());
        state.form.set_field(FieldKind::Message, "");
        assert!(!state.can_submit());
    }

    #[test]
    fn test_can_submit_false_while_submitting() {
        let mut state = filled_state();
        state.begin_submission();
        assert!(!state.can_submit());
    }

    #[test]
    fn test_begin_submission_resets_status() {
        let mut state = filled_state();
        state.status = SubmitStatus::Error;
        let snapshot = state.begin_submission();
        assert!(state.is_submitting);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(snapshot.name, "Ana");
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled_state();
        state.begin_submission();
        state.finish_submission(true);

        assert_eq!(state.status, SubmitStatus::Success);
        assert!(!state.is_submitting);
        for kind in FieldKind::ALL {
            assert_eq!(state.form.value(kind), "");
        }
        let toast = state.toast.as_ref().expect("success toast");
        assert_eq!(toast.title, SUCCESS_TOAST_TITLE);
        assert_eq!(toast.severity, ToastSeverity::Default);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled_state();
        let snapshot = state.begin_submission();
        state.finish_submission(false);

        assert_eq!(state.status, SubmitStatus::Error);
        assert!(!state.is_submitting);
        assert_eq!(state.form.snapshot(), snapshot);
        let toast = state.toast.as_ref().expect("failure toast");
        assert_eq!(toast.title, FAILURE_TOAST_TITLE);
        assert_eq!(toast.severity, ToastSeverity::Destructive);
    }

    #[test]
    fn test_retry_after_failure_is_allowed() {
        let mut state = filled_state();
        state.begin_submission();
        state.finish_submission(false);
        assert!(state.can_submit());
    }

    #[test]
    fn test_expire_toast_removes_expired() {
        let mut state = AppState {
            toast: Some(
                Toast::new("t", "d", ToastSeverity::Default).with_duration(Duration::ZERO),
            ),
            ..Default::default()
        };
        state.expire_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_expire_toast_keeps_fresh() {
        let mut state = AppState {
            toast: Some(Toast::new("t", "d", ToastSeverity::Default)),
            ..Default::default()
        };
        state.expire_toast();
        assert!(state.toast.is_some());
    }
}
