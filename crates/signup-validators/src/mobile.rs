//! Mobile number validator

use crate::lazy_patterns::MOBILE_REGEX;
use crate::{FieldError, FieldResult, FieldValidator};

pub const MOBILE_ERROR: &str = "Enter valid 10-digit mobile number";

/// Validates a 10-digit mobile number whose first digit is 6, 7, 8 or 9.
///
/// Only ASCII digits are accepted; no country code, spaces or dashes.
///
/// # Examples
///
/// ```
/// use signup_validators::{FieldValidator, MobileValidator};
///
/// let validator = MobileValidator::new();
/// assert!(validator.validate("9998887776").is_ok());
/// assert!(validator.validate("5998887776").is_err());
/// assert!(validator.validate("99988877761").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MobileValidator {
	message: Option<String>,
}

impl MobileValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl FieldValidator for MobileValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if MOBILE_REGEX.is_match(value.trim()) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or(MOBILE_ERROR);
			Err(FieldError::validation(msg))
		}
	}
}

pub fn validate_mobile(value: &str) -> FieldResult<()> {
	MobileValidator::new().validate(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("9998887776")]
	#[case("6000000000")]
	#[case("7123456789")]
	#[case("8123456789")]
	#[case(" 9998887776 ")]
	fn test_mobile_valid(#[case] mobile: &str) {
		// Act + Assert
		assert!(validate_mobile(mobile).is_ok(), "Expected '{mobile}' to pass");
	}

	#[rstest]
	#[case("")]
	#[case("5998887776")]
	#[case("0998887776")]
	#[case("99988877761")]
	#[case("999888777")]
	#[case("99988-87776")]
	#[case("+919998887776")]
	#[case("99988877a6")]
	#[case("９９９８８８７７７６")]
	fn test_mobile_invalid(#[case] mobile: &str) {
		// Act
		let result = validate_mobile(mobile);

		// Assert
		assert_eq!(result, Err(FieldError::validation(MOBILE_ERROR)));
	}
}
