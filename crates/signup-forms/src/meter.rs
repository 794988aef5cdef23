//! Password strength meter presentation model.

use serde::Serialize;
use signup_validators::{StrengthLevel, StrengthScore, score};

/// What the strength meter should show.
///
/// The bar width grows in 20% steps: a score of 0 still shows a 20% bar,
/// a score of 4 fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthMeter {
	pub visible: bool,
	pub width_percent: u8,
	pub color: Option<&'static str>,
	pub label: Option<&'static str>,
}

impl StrengthMeter {
	/// Meter for a freshly typed password.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::StrengthMeter;
	///
	/// let meter = StrengthMeter::for_password("Abc123");
	/// assert_eq!(meter.width_percent, 80);
	/// assert_eq!(meter.label, Some("Strong"));
	/// ```
	pub fn for_password(password: &str) -> Self {
		Self::from_score(score(password))
	}

	pub fn from_score(score: StrengthScore) -> Self {
		let level = StrengthLevel::from(score);
		Self {
			visible: true,
			width_percent: (score.value() + 1) * 20,
			color: Some(level.color()),
			label: Some(level.label()),
		}
	}

	/// State after a reset: empty bar, meter and label hidden.
	pub fn hidden() -> Self {
		Self {
			visible: false,
			width_percent: 0,
			color: None,
			label: None,
		}
	}
}

impl Default for StrengthMeter {
	fn default() -> Self {
		Self::hidden()
	}
}
