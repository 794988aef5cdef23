//! Password strength scoring
//!
//! The score is the number of satisfied predicates, clamped to `0..=4`:
//!
//! | Predicate | Points |
//! |-----------|--------|
//! | more than 5 characters | +1 |
//! | more than 8 characters | +1 |
//! | an ASCII uppercase letter | +1 |
//! | an ASCII digit | +1 |
//! | a character outside `[A-Za-z0-9]` | +1 |

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 4;

/// Discrete password strength in `0..=4`.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StrengthScore(u8);

impl StrengthScore {
	/// Create a score, clamped to the valid range (0-4)
	///
	/// # Examples
	///
	/// ```
	/// use signup_validators::StrengthScore;
	///
	/// assert_eq!(StrengthScore::new(3).value(), 3);
	/// assert_eq!(StrengthScore::new(5).value(), 4);
	/// ```
	pub fn new(score: u8) -> Self {
		Self(score.clamp(MIN_SCORE, MAX_SCORE))
	}

	pub fn value(&self) -> u8 {
		self.0
	}

	pub fn level(&self) -> StrengthLevel {
		StrengthLevel::from(*self)
	}
}

impl fmt::Display for StrengthScore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.0, MAX_SCORE)
	}
}

/// Score a password.
///
/// Pure function of its input; the empty string scores 0.
///
/// # Examples
///
/// ```
/// use signup_validators::score;
///
/// assert_eq!(score("").value(), 0);
/// assert_eq!(score("abcdef").value(), 1);
/// assert_eq!(score("Abc12345!").value(), 4);
/// ```
pub fn score(password: &str) -> StrengthScore {
	if password.is_empty() {
		return StrengthScore::default();
	}

	let length = password.chars().count();
	let predicates = [
		length > 5,
		length > 8,
		password.chars().any(|c| c.is_ascii_uppercase()),
		password.chars().any(|c| c.is_ascii_digit()),
		password.chars().any(|c| !c.is_ascii_alphanumeric()),
	];
	let raw = predicates.iter().filter(|hit| **hit).count() as u8;

	StrengthScore::new(raw)
}

/// Named strength bands shown by the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
	VeryWeak,
	Weak,
	Medium,
	Strong,
	VeryStrong,
}

impl StrengthLevel {
	pub fn label(&self) -> &'static str {
		match self {
			Self::VeryWeak => "Very Weak",
			Self::Weak => "Weak",
			Self::Medium => "Medium",
			Self::Strong => "Strong",
			Self::VeryStrong => "Very Strong",
		}
	}

	/// Hex colour of the meter bar and label.
	pub fn color(&self) -> &'static str {
		match self {
			Self::VeryWeak | Self::Weak => "#ff4b4b",
			Self::Medium => "#f1c40f",
			Self::Strong | Self::VeryStrong => "#2ecc71",
		}
	}
}

impl From<StrengthScore> for StrengthLevel {
	fn from(score: StrengthScore) -> Self {
		match score.value() {
			0 => Self::VeryWeak,
			1 => Self::Weak,
			2 => Self::Medium,
			3 => Self::Strong,
			_ => Self::VeryStrong,
		}
	}
}

impl fmt::Display for StrengthLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
