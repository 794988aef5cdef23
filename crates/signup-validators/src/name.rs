//! Name validator

use crate::lazy_patterns::NAME_REGEX;
use crate::{FieldError, FieldResult, FieldValidator};

pub const NAME_ERROR: &str = "Name must be 3+ chars & no symbols";

/// Validates a person's name: three or more ASCII letters or whitespace.
///
/// Surrounding whitespace is trimmed before matching, so `"  Al  "` is
/// still too short.
///
/// # Examples
///
/// ```
/// use signup_validators::{FieldValidator, NameValidator};
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("Alice Smith").is_ok());
/// assert!(validator.validate("Al").is_err());
/// assert!(validator.validate("R2-D2").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl NameValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl FieldValidator for NameValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if NAME_REGEX.is_match(value.trim()) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or(NAME_ERROR);
			Err(FieldError::validation(msg))
		}
	}
}

/// Validates a name with the default rules and message.
pub fn validate_name(value: &str) -> FieldResult<()> {
	NameValidator::new().validate(value)
}
