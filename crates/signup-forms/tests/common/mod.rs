//! Shared fixtures for submission flow tests

use parking_lot::Mutex;
use rstest::fixture;
use signup_forms::{FormView, NotificationKind, SubmissionState};
use signup_validators::{FieldId, FieldResult, SignupData, StrengthScore};

/// One callback received by [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
	FieldResult {
		field: FieldId,
		valid: bool,
		message: Option<String>,
	},
	Strength(u8),
	EnterLoading,
	ExitLoading,
	Notify {
		message: String,
		kind: NotificationKind,
	},
	ResetForm,
	InvalidSubmission,
	Transition(SubmissionState, SubmissionState),
}

/// View that records every callback in order.
#[derive(Default)]
pub struct RecordingView {
	events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
	pub fn events(&self) -> Vec<ViewEvent> {
		self.events.lock().clone()
	}

	pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
		self.events.lock().iter().filter(|e| predicate(e)).count()
	}

	/// Sequence of states visited, starting with the first `from`.
	pub fn states(&self) -> Vec<SubmissionState> {
		let events = self.events.lock();
		let mut states = Vec::new();
		for event in events.iter() {
			if let ViewEvent::Transition(from, to) = event {
				if states.is_empty() {
					states.push(*from);
				}
				states.push(*to);
			}
		}
		states
	}

	fn push(&self, event: ViewEvent) {
		self.events.lock().push(event);
	}
}

impl FormView for RecordingView {
	fn report_field_result(&self, field: FieldId, result: &FieldResult<()>) {
		self.push(ViewEvent::FieldResult {
			field,
			valid: result.is_ok(),
			message: result.as_ref().err().map(|e| e.message().to_string()),
		});
	}

	fn report_strength(&self, score: StrengthScore) {
		self.push(ViewEvent::Strength(score.value()));
	}

	fn enter_loading(&self) {
		self.push(ViewEvent::EnterLoading);
	}

	fn exit_loading(&self) {
		self.push(ViewEvent::ExitLoading);
	}

	fn notify(&self, message: &str, kind: NotificationKind) {
		self.push(ViewEvent::Notify {
			message: message.to_string(),
			kind,
		});
	}

	fn reset_form(&self) {
		self.push(ViewEvent::ResetForm);
	}

	fn signal_invalid_submission(&self) {
		self.push(ViewEvent::InvalidSubmission);
	}

	fn on_transition(&self, from: SubmissionState, to: SubmissionState) {
		self.push(ViewEvent::Transition(from, to));
	}
}

#[fixture]
pub fn valid_data() -> SignupData {
	SignupData::new(
		"Alice Smith",
		"alice@example.com",
		"9998887776",
		"Abc12345!",
		"Abc12345!",
	)
}
