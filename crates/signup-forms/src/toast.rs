//! Toast notifications with automatic dismissal.

use crate::view::NotificationKind;
use signup_conf::SignupSettings;
use std::time::{Duration, Instant};

/// A single toast on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub message: String,
	pub kind: NotificationKind,
	pub shown_at: Instant,
	pub dismiss_after: Duration,
}

impl Toast {
	pub fn new(
		message: impl Into<String>,
		kind: NotificationKind,
		settings: &SignupSettings,
		shown_at: Instant,
	) -> Self {
		Self {
			message: message.into(),
			kind,
			shown_at,
			dismiss_after: settings.toast_duration(),
		}
	}

	pub fn icon(&self) -> &'static str {
		self.kind.icon()
	}

	pub fn is_expired(&self, now: Instant) -> bool {
		now.saturating_duration_since(self.shown_at) >= self.dismiss_after
	}
}

/// Toasts currently on screen, oldest first.
///
/// # Examples
///
/// ```
/// use signup_conf::SignupSettings;
/// use signup_forms::{NotificationKind, ToastQueue};
/// use std::time::{Duration, Instant};
///
/// let mut queue = ToastQueue::new(SignupSettings::default());
/// let start = Instant::now();
/// queue.push("Account created successfully!", NotificationKind::Success, start);
///
/// queue.prune(start + Duration::from_millis(4499));
/// assert_eq!(queue.len(), 1);
/// queue.prune(start + Duration::from_millis(4500));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ToastQueue {
	settings: SignupSettings,
	toasts: Vec<Toast>,
}

impl ToastQueue {
	pub fn new(settings: SignupSettings) -> Self {
		Self {
			settings,
			toasts: Vec::new(),
		}
	}

	pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
		self.toasts
			.push(Toast::new(message, kind, &self.settings, now));
	}

	/// Drop every toast whose display time has elapsed; returns how many.
	pub fn prune(&mut self, now: Instant) -> usize {
		let before = self.toasts.len();
		self.toasts.retain(|toast| !toast.is_expired(now));
		before - self.toasts.len()
	}

	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NotificationKind::Success, "check-circle")]
	#[case(NotificationKind::Error, "exclamation-circle")]
	fn test_icon_by_kind(#[case] kind: NotificationKind, #[case] icon: &str) {
		// Arrange
		let toast = Toast::new("msg", kind, &SignupSettings::default(), Instant::now());

		// Act + Assert
		assert_eq!(toast.icon(), icon);
		assert_eq!(toast.dismiss_after, Duration::from_millis(4500));
	}

	#[rstest]
	fn test_prune_keeps_younger_toasts() {
		// Arrange
		let settings = SignupSettings {
			toast_duration_ms: 1000,
			..SignupSettings::default()
		};
		let mut queue = ToastQueue::new(settings);
		let start = Instant::now();
		queue.push("first", NotificationKind::Error, start);
		queue.push(
			"second",
			NotificationKind::Success,
			start + Duration::from_millis(600),
		);

		// Act
		let removed = queue.prune(start + Duration::from_millis(1200));

		// Assert
		assert_eq!(removed, 1);
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.toasts()[0].message, "second");
	}

	#[rstest]
	fn test_not_expired_before_shown() {
		// Arrange
		let now = Instant::now();
		let toast = Toast::new(
			"later",
			NotificationKind::Success,
			&SignupSettings::default(),
			now + Duration::from_secs(1),
		);

		// Act + Assert
		assert!(!toast.is_expired(now));
	}
}
