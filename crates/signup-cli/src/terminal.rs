//! Terminal rendering of the signup form callbacks.

use colored::Colorize;
use parking_lot::Mutex;
use signup_conf::SignupSettings;
use signup_forms::{FormView, NotificationKind, StrengthMeter, SubmissionState, ToastQueue};
use signup_validators::{FieldId, FieldResult, StrengthScore};
use std::io::Write;
use std::time::Instant;

/// [`FormView`] that writes each callback as one line.
pub(crate) struct TerminalView<W: Write + Send> {
	out: Mutex<W>,
	toasts: Mutex<ToastQueue>,
}

impl<W: Write + Send> TerminalView<W> {
	pub(crate) fn new(out: W, settings: SignupSettings) -> Self {
		Self {
			out: Mutex::new(out),
			toasts: Mutex::new(ToastQueue::new(settings)),
		}
	}

	fn line(&self, text: String) {
		let mut out = self.out.lock();
		// A closed stdout is not worth aborting the cycle for.
		let _ = writeln!(out, "{text}");
	}

	/// Toasts still on screen at `now`.
	pub(crate) fn live_toasts(&self, now: Instant) -> usize {
		let mut toasts = self.toasts.lock();
		toasts.prune(now);
		toasts.len()
	}

	#[cfg(test)]
	pub(crate) fn into_inner(self) -> W {
		self.out.into_inner()
	}
}

/// One-line rendering of a strength meter, e.g. `[████░] Strong`.
pub(crate) fn render_meter(meter: &StrengthMeter) -> String {
	if !meter.visible {
		return String::new();
	}
	let filled = usize::from(meter.width_percent / 20);
	let bar = format!("{}{}", "█".repeat(filled), "░".repeat(5 - filled));
	let label = meter.label.unwrap_or_default();
	let colored_bar = match meter.width_percent {
		0..=40 => bar.red(),
		60 => bar.yellow(),
		_ => bar.green(),
	};
	format!("[{colored_bar}] {label}")
}

impl<W: Write + Send> FormView for TerminalView<W> {
	fn report_field_result(&self, field: FieldId, result: &FieldResult<()>) {
		match result {
			Ok(()) => self.line(format!("  {} {}", "✓".green(), field.label())),
			Err(error) => self.line(format!(
				"  {} {}: {}",
				"✗".red(),
				field.label(),
				error.message().red()
			)),
		}
	}

	fn report_strength(&self, score: StrengthScore) {
		self.line(format!(
			"Strength: {}",
			render_meter(&StrengthMeter::from_score(score))
		));
	}

	fn enter_loading(&self) {
		self.line(format!("{}", "Submitting...".dimmed()));
	}

	fn exit_loading(&self) {
		tracing::trace!("Loading finished");
	}

	fn notify(&self, message: &str, kind: NotificationKind) {
		let now = Instant::now();
		{
			let mut toasts = self.toasts.lock();
			toasts.prune(now);
			toasts.push(message, kind, now);
		}
		let text = match kind {
			NotificationKind::Success => format!("✔ {message}").green().bold(),
			NotificationKind::Error => format!("✖ {message}").red().bold(),
		};
		self.line(text.to_string());
	}

	fn reset_form(&self) {
		tracing::debug!("Form fields cleared");
	}

	fn signal_invalid_submission(&self) {
		self.line(format!("{}", "Submission blocked by invalid fields".yellow()));
	}

	fn on_transition(&self, from: SubmissionState, to: SubmissionState) {
		tracing::debug!(%from, %to, "state");
	}
}
