//! Email validator

use crate::lazy_patterns::EMAIL_REGEX;
use crate::{FieldError, FieldResult, FieldValidator};

pub const EMAIL_ERROR: &str = "Enter a valid email address";

/// Validates an email address against a dotted-local@domain pattern.
///
/// Accepted forms:
/// - local part of dot-separated atoms without `<>()[]\.,;:@"` or whitespace,
///   or a double-quoted string
/// - domain of dotted labels ending in an alphabetic TLD of 2+ letters,
///   or a bracketed IPv4 literal such as `[192.168.0.1]`
///
/// The input is trimmed first.
///
/// # Examples
///
/// ```
/// use signup_validators::{EmailValidator, FieldValidator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("alice@example.com").is_ok());
/// assert!(validator.validate("alice..smith@example.com").is_err());
/// assert!(validator.validate("alice@localhost").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl FieldValidator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value.trim()) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or(EMAIL_ERROR);
			Err(FieldError::validation(msg))
		}
	}
}

pub fn validate_email(value: &str) -> FieldResult<()> {
	EmailValidator::new().validate(value)
}
