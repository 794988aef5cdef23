//! Show/hide toggle for the password input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordVisibility {
	#[default]
	Hidden,
	Shown,
}

impl PasswordVisibility {
	/// Flip between hidden and shown, returning the new state.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::PasswordVisibility;
	///
	/// let mut visibility = PasswordVisibility::default();
	/// assert_eq!(visibility.input_type(), "password");
	/// visibility.toggle();
	/// assert_eq!(visibility.input_type(), "text");
	/// assert_eq!(visibility.icon(), "fa-eye-slash");
	/// ```
	pub fn toggle(&mut self) -> Self {
		*self = match self {
			Self::Hidden => Self::Shown,
			Self::Shown => Self::Hidden,
		};
		*self
	}

	/// `type` attribute of the password input.
	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Hidden => "password",
			Self::Shown => "text",
		}
	}

	pub fn icon(&self) -> &'static str {
		match self {
			Self::Hidden => "fa-eye",
			Self::Shown => "fa-eye-slash",
		}
	}
}
