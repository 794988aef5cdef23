//! Field validators for the signup form
//!
//! This crate holds the pure half of the signup form: format checks for each
//! input field and the password strength score. Nothing here touches the view
//! layer; every function maps a raw string to a result and can be called as
//! often as the caller likes.
//!
//! ## Checks
//!
//! | Field | Validator | Rule |
//! |-------|-----------|------|
//! | name | [`NameValidator`] | 3+ ASCII letters or whitespace, after trimming |
//! | email | [`EmailValidator`] | `local@domain`, dotted atoms or a quoted local part |
//! | mobile | [`MobileValidator`] | 10 digits starting with 6, 7, 8 or 9 |
//! | password | [`PasswordLengthValidator`] | at least 8 characters |
//! | c-password | [`ConfirmPasswordValidator`] | non-empty and equal to the password |
//!
//! ## Example
//!
//! ```
//! use signup_validators::{FieldId, SignupData, validate_all, score};
//!
//! let data = SignupData::new("Alice Smith", "alice@example.com", "9998887776", "Abc12345!", "Abc12345!");
//! let report = validate_all(&data);
//! assert!(report.is_valid());
//!
//! assert_eq!(score("Abc12345!").value(), 4);
//! assert_eq!(FieldId::ConfirmPassword.html_id(), "c-password");
//! ```

pub(crate) mod lazy_patterns;

pub mod email;
pub mod errors;
pub mod field;
pub mod mobile;
pub mod name;
pub mod password;
pub mod report;
pub mod strength;

pub use email::{EmailValidator, validate_email};
pub use errors::{FieldError, FieldResult, FieldResultExt};
pub use field::{FieldId, SignupData};
pub use mobile::{MobileValidator, validate_mobile};
pub use name::{NameValidator, validate_name};
pub use password::{
	ConfirmPasswordValidator, DEFAULT_PASSWORD_MIN_LENGTH, PasswordLengthValidator,
	validate_confirm_password, validate_password,
};
pub use report::{ValidationReport, validate_all};
pub use strength::{StrengthLevel, StrengthScore, score};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::email::*;
	pub use crate::errors::*;
	pub use crate::field::*;
	pub use crate::mobile::*;
	pub use crate::name::*;
	pub use crate::password::*;
	pub use crate::report::*;
	pub use crate::strength::*;
	pub use crate::FieldValidator;
}

/// A check applied to a single raw field value.
///
/// Implementations are total: any input, including the empty string,
/// produces `Ok(())` or a [`FieldError`], never a panic.
pub trait FieldValidator {
	fn validate(&self, value: &str) -> FieldResult<()>;
}
