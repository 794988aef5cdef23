//! Contract between the submission controller and the view layer.

use crate::controller::SubmissionState;
use serde::{Deserialize, Serialize};
use signup_validators::{FieldId, FieldResult, StrengthScore};
use std::fmt;

/// Flavour of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
	Success,
	Error,
}

impl NotificationKind {
	/// CSS class added to the toast element.
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}

	/// Font Awesome icon name shown before the message.
	pub fn icon(&self) -> &'static str {
		match self {
			Self::Success => "check-circle",
			Self::Error => "exclamation-circle",
		}
	}
}

impl fmt::Display for NotificationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.css_class())
	}
}

/// Callbacks the controller invokes on the view layer.
///
/// The controller never holds references to presentation elements; every
/// side effect goes through this trait. Implementations must not block:
/// callbacks run on the controller's own task.
pub trait FormView: Send + Sync {
	/// Per-field validation outcome, one call per field on every submit.
	fn report_field_result(&self, field: FieldId, result: &FieldResult<()>);

	/// Strength of the password, on every password input event.
	fn report_strength(&self, score: StrengthScore);

	/// Disable the submit control and show the spinner.
	fn enter_loading(&self);

	/// Re-enable the submit control and hide the spinner.
	fn exit_loading(&self);

	/// Show a toast notification.
	fn notify(&self, message: &str, kind: NotificationKind);

	/// Clear every field and hide the strength indicator.
	fn reset_form(&self);

	/// Generic failure cue, e.g. a shake animation.
	fn signal_invalid_submission(&self);

	/// Called after every state transition. Defaults to doing nothing.
	fn on_transition(&self, _from: SubmissionState, _to: SubmissionState) {}
}
