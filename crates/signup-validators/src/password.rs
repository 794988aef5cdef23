//! Password and confirm-password validators

use crate::{FieldError, FieldResult, FieldValidator};

pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_ERROR: &str = "Password must be at least 8 chars";
pub const CONFIRM_PASSWORD_ERROR: &str = "Passwords do not match";

/// Validates that a password has a minimum number of characters.
///
/// The value is not trimmed: whitespace counts toward the length. Length is
/// measured in `char`s, so multi-byte characters count once.
///
/// # Examples
///
/// ```
/// use signup_validators::{FieldValidator, PasswordLengthValidator};
///
/// let validator = PasswordLengthValidator::new();
/// assert!(validator.validate("abcdefgh").is_ok());
/// assert!(validator.validate("abcdefg").is_err());
///
/// let strict = PasswordLengthValidator::new().with_min_length(12);
/// assert!(strict.validate("abcdefgh").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordLengthValidator {
	min_length: usize,
	message: Option<String>,
}

impl PasswordLengthValidator {
	pub fn new() -> Self {
		Self {
			min_length: DEFAULT_PASSWORD_MIN_LENGTH,
			message: None,
		}
	}

	/// Sets the minimum length.
	///
	/// A custom minimum without a custom message reports
	/// "Password must be at least {min} chars".
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	fn error(&self) -> FieldError {
		match &self.message {
			Some(msg) => FieldError::validation(msg.clone()),
			None if self.min_length == DEFAULT_PASSWORD_MIN_LENGTH => {
				FieldError::validation(PASSWORD_ERROR)
			}
			None => FieldError::validation(format!(
				"Password must be at least {} chars",
				self.min_length
			)),
		}
	}
}

impl Default for PasswordLengthValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldValidator for PasswordLengthValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() >= self.min_length {
			Ok(())
		} else {
			Err(self.error())
		}
	}
}

/// Validates that the confirmation matches the password.
///
/// An empty confirmation always fails, even when the password is empty too.
///
/// # Examples
///
/// ```
/// use signup_validators::ConfirmPasswordValidator;
///
/// let validator = ConfirmPasswordValidator::new();
/// assert!(validator.validate("Abc12345!", "Abc12345!").is_ok());
/// assert!(validator.validate("Abc12345!", "abc12345!").is_err());
/// assert!(validator.validate("", "").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfirmPasswordValidator {
	message: Option<String>,
}

impl ConfirmPasswordValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, password: &str, confirm: &str) -> FieldResult<()> {
		if confirm.is_empty() || confirm != password {
			let msg = self.message.as_deref().unwrap_or(CONFIRM_PASSWORD_ERROR);
			return Err(FieldError::validation(msg));
		}
		Ok(())
	}
}

pub fn validate_password(value: &str) -> FieldResult<()> {
	PasswordLengthValidator::new().validate(value)
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> FieldResult<()> {
	ConfirmPasswordValidator::new().validate(password, confirm)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("abcdefgh")]
	#[case("Abc12345!")]
	#[case("        ")]
	#[case("pässwörd")]
	fn test_password_valid(#[case] password: &str) {
		assert!(validate_password(password).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("abc")]
	#[case("abcdefg")]
	#[case("äöüäöüä")]
	fn test_password_too_short(#[case] password: &str) {
		// Act
		let result = validate_password(password);

		// Assert
		assert_eq!(result, Err(FieldError::validation(PASSWORD_ERROR)));
	}

	#[rstest]
	#[case("😀😀😀😀", false)]
	#[case("😀😀😀😀😀😀😀😀", true)]
	fn test_password_length_counts_chars(#[case] password: &str, #[case] ok: bool) {
		// Act
		let result = validate_password(password);

		// Assert
		assert_eq!(result.is_ok(), ok, "{} chars", password.chars().count());
	}

	#[rstest]
	fn test_password_custom_min_length_message() {
		// Arrange
		let validator = PasswordLengthValidator::new().with_min_length(10);

		// Act
		let result = validator.validate("abcdefgh");

		// Assert
		assert_eq!(
			result,
			Err(FieldError::validation("Password must be at least 10 chars"))
		);
	}

	#[rstest]
	#[case("Abc12345!", "Abc12345!", true)]
	#[case("Abc12345!", "Abc12345", false)]
	#[case("Abc12345!", "", false)]
	#[case("", "", false)]
	#[case("", "something", false)]
	#[case("short", "short", true)]
	fn test_confirm_password(#[case] password: &str, #[case] confirm: &str, #[case] ok: bool) {
		// Act
		let result = validate_confirm_password(password, confirm);

		// Assert
		assert_eq!(result.is_ok(), ok);
		if !ok {
			assert_eq!(result, Err(FieldError::validation(CONFIRM_PASSWORD_ERROR)));
		}
	}
}
