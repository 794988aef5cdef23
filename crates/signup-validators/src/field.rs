//! Field identifiers and the raw values submitted with the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five inputs on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
	Name,
	Email,
	Mobile,
	Password,
	ConfirmPassword,
}

impl FieldId {
	/// All fields in the order they appear on the form and are validated.
	pub const ALL: [FieldId; 5] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Mobile,
		FieldId::Password,
		FieldId::ConfirmPassword,
	];

	/// The `id` attribute of the input element in the host markup.
	///
	/// # Examples
	///
	/// ```
	/// use signup_validators::FieldId;
	///
	/// assert_eq!(FieldId::Name.html_id(), "username");
	/// assert_eq!(FieldId::ConfirmPassword.html_id(), "c-password");
	/// ```
	pub fn html_id(&self) -> &'static str {
		match self {
			Self::Name => "username",
			Self::Email => "email",
			Self::Mobile => "mobile",
			Self::Password => "password",
			Self::ConfirmPassword => "c-password",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Email => "Email",
			Self::Mobile => "Mobile",
			Self::Password => "Password",
			Self::ConfirmPassword => "Confirm password",
		}
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.html_id())
	}
}

/// Error returned when parsing an unknown field id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
	type Err = UnknownField;

	/// Accepts both the html id (`c-password`) and the snake-case name
	/// (`confirm_password`).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"username" | "name" => Ok(Self::Name),
			"email" => Ok(Self::Email),
			"mobile" => Ok(Self::Mobile),
			"password" => Ok(Self::Password),
			"c-password" | "confirm_password" | "confirm-password" => Ok(Self::ConfirmPassword),
			other => Err(UnknownField(other.to_string())),
		}
	}
}

/// Raw string values of every field, as read from the view on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupData {
	pub name: String,
	pub email: String,
	pub mobile: String,
	pub password: String,
	pub confirm_password: String,
}

impl SignupData {
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		mobile: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			mobile: mobile.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}

	/// Raw value of the given field.
	pub fn get(&self, field: FieldId) -> &str {
		match field {
			FieldId::Name => &self.name,
			FieldId::Email => &self.email,
			FieldId::Mobile => &self.mobile,
			FieldId::Password => &self.password,
			FieldId::ConfirmPassword => &self.confirm_password,
		}
	}

	/// Replace the value of the given field.
	pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
		let slot = match field {
			FieldId::Name => &mut self.name,
			FieldId::Email => &mut self.email,
			FieldId::Mobile => &mut self.mobile,
			FieldId::Password => &mut self.password,
			FieldId::ConfirmPassword => &mut self.confirm_password,
		};
		*slot = value.into();
	}

	/// Empty every field, as `form.reset()` does after a successful submit.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}
