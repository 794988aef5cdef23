//! Facade integration tests
//!
//! Drives the whole stack through `signup::prelude`.

#![cfg(all(feature = "forms", feature = "conf"))]

use rstest::rstest;
use signup::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct TallyView {
	errors: AtomicUsize,
	successes: AtomicUsize,
	resets: AtomicUsize,
}

impl FormView for TallyView {
	fn report_field_result(&self, _field: FieldId, result: &FieldResult<()>) {
		if !result.is_valid() {
			self.errors.fetch_add(1, Ordering::SeqCst);
		}
	}
	fn report_strength(&self, _score: StrengthScore) {}
	fn enter_loading(&self) {}
	fn exit_loading(&self) {}
	fn notify(&self, _message: &str, kind: NotificationKind) {
		if kind == NotificationKind::Success {
			self.successes.fetch_add(1, Ordering::SeqCst);
		}
	}
	fn reset_form(&self) {
		self.resets.fetch_add(1, Ordering::SeqCst);
	}
	fn signal_invalid_submission(&self) {}
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_prelude_end_to_end() {
	// Arrange
	let view = Arc::new(TallyView::default());
	let settings = SignupSettings::from_toml_str("submit_delay_ms = 50").unwrap();
	let controller = SubmissionController::new(view.clone(), settings);
	let data = SignupData::new(
		"Alice Smith",
		"alice@example.com",
		"9998887776",
		"Abc12345!",
		"Abc12345!",
	);

	// Act
	let strength = controller.password_input(&data.password);
	let outcome = controller.submit(&data).await;

	// Assert
	assert_eq!(strength.level(), StrengthLevel::VeryStrong);
	assert!(outcome.is_success());
	assert_eq!(view.errors.load(Ordering::SeqCst), 0);
	assert_eq!(view.successes.load(Ordering::SeqCst), 1);
	assert_eq!(view.resets.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_validators_reachable_without_controller() {
	// Arrange
	let data = SignupData::new("Al", "", "99988877761", "short", "");

	// Act
	let report = validate_all(&data);

	// Assert
	assert_eq!(report.errors().count(), 5);
	assert_eq!(score("").value(), 0);
}
