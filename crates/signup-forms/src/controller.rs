//! Submission state machine
//!
//! ```text
//!            submit()
//!   Idle ─────────────► Validating ──all valid──► Loading
//!    ▲                      │                        │ submit_delay
//!    │                 any invalid                   ▼
//!    ├──────────────── Failed ◄┘                 Succeeded
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! `Validating`, `Failed` and `Succeeded` are momentary; only `Loading`
//! spans an await point. A submit that arrives while the controller is not
//! `Idle` is rejected without touching the view. Dropping the `submit`
//! future during `Loading` leaves loading and returns the controller to
//! `Idle` without a notification.

use crate::view::{FormView, NotificationKind};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use signup_conf::SignupSettings;
use signup_validators::{
	PasswordLengthValidator, SignupData, StrengthScore, ValidationReport, score,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State of the submission cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
	#[default]
	Idle,
	Validating,
	Loading,
	Succeeded,
	Failed,
}

impl fmt::Display for SubmissionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Idle => "idle",
			Self::Validating => "validating",
			Self::Loading => "loading",
			Self::Succeeded => "succeeded",
			Self::Failed => "failed",
		};
		f.write_str(name)
	}
}

/// How a call to [`SubmissionController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
	/// All fields passed and the simulated request completed.
	Succeeded,
	/// At least one field failed; the full report is attached.
	Invalid(ValidationReport),
	/// Another submission was already in flight.
	Rejected,
}

impl SubmissionOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Succeeded)
	}
}

/// Drives validation and the simulated submission for one form.
pub struct SubmissionController {
	view: Arc<dyn FormView>,
	settings: SignupSettings,
	password_rule: PasswordLengthValidator,
	state: Mutex<SubmissionState>,
}

impl SubmissionController {
	pub fn new(view: Arc<dyn FormView>, settings: SignupSettings) -> Self {
		let password_rule =
			PasswordLengthValidator::new().with_min_length(settings.password_min_length);
		Self {
			view,
			settings,
			password_rule,
			state: Mutex::new(SubmissionState::Idle),
		}
	}

	pub fn state(&self) -> SubmissionState {
		*self.state.lock()
	}

	pub fn settings(&self) -> &SignupSettings {
		&self.settings
	}

	/// Whether a submission is in flight; the submit control should be
	/// disabled while this is true.
	pub fn is_busy(&self) -> bool {
		self.state() != SubmissionState::Idle
	}

	/// Score the password on a keystroke and report it to the view.
	pub fn password_input(&self, password: &str) -> StrengthScore {
		let strength = score(password);
		self.view.report_strength(strength);
		strength
	}

	/// Run one submission cycle.
	///
	/// Every field is validated and reported. If any field fails, the view is
	/// told to signal the failure and the cycle ends immediately. Otherwise
	/// the controller enters `Loading`, waits `submit_delay`, and resolves to
	/// success.
	pub async fn submit(&self, data: &SignupData) -> SubmissionOutcome {
		if !self.transition(SubmissionState::Idle, SubmissionState::Validating) {
			warn!(state = %self.state(), "Submission rejected: already in flight");
			return SubmissionOutcome::Rejected;
		}

		let report = ValidationReport::build(data, &self.password_rule);
		for (field, result) in report.results() {
			self.view.report_field_result(*field, result);
		}

		if !report.is_valid() {
			let failing: Vec<_> = report.errors().map(|(field, _)| field.html_id()).collect();
			debug!(?failing, "Submission failed validation");
			self.transition(SubmissionState::Validating, SubmissionState::Failed);
			self.view.signal_invalid_submission();
			self.view
				.notify(&self.settings.failure_message, NotificationKind::Error);
			self.transition(SubmissionState::Failed, SubmissionState::Idle);
			return SubmissionOutcome::Invalid(report);
		}

		self.transition(SubmissionState::Validating, SubmissionState::Loading);
		self.view.enter_loading();
		let mut guard = LoadingGuard {
			controller: self,
			armed: true,
		};
		debug!(delay_ms = self.settings.submit_delay_ms, "Simulating submission");
		tokio::time::sleep(self.settings.submit_delay()).await;
		guard.armed = false;
		self.view.exit_loading();

		self.transition(SubmissionState::Loading, SubmissionState::Succeeded);
		self.view
			.notify(&self.settings.success_message, NotificationKind::Success);
		self.view.reset_form();
		self.transition(SubmissionState::Succeeded, SubmissionState::Idle);
		info!("Signup submission succeeded");
		SubmissionOutcome::Succeeded
	}

	/// Move from `from` to `to` if the controller is currently in `from`.
	///
	/// The lock is released before the view is told about the transition.
	fn transition(&self, from: SubmissionState, to: SubmissionState) -> bool {
		{
			let mut state = self.state.lock();
			if *state != from {
				return false;
			}
			*state = to;
		}
		debug!(%from, %to, "Submission state transition");
		self.view.on_transition(from, to);
		true
	}
}

/// Unwinds `Loading` back to `Idle` when a `submit` future is dropped
/// mid-delay.
struct LoadingGuard<'a> {
	controller: &'a SubmissionController,
	armed: bool,
}

impl Drop for LoadingGuard<'_> {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		warn!("Submission dropped while loading");
		self.controller.view.exit_loading();
		self.controller
			.transition(SubmissionState::Loading, SubmissionState::Idle);
	}
}

impl fmt::Debug for SubmissionController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubmissionController")
			.field("state", &self.state())
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}
