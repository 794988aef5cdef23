//! Validation failure type shared by every field check.

use serde::{Deserialize, Serialize};

/// The only failure a field check can produce.
///
/// The message is the human-readable text shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	pub fn validation(message: impl Into<String>) -> Self {
		Self::Validation(message.into())
	}

	/// Message to render next to the failing field.
	pub fn message(&self) -> &str {
		match self {
			Self::Validation(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// `{ valid, message }` view of a field result.
///
/// # Examples
///
/// ```
/// use signup_validators::{FieldError, FieldResult, FieldResultExt};
///
/// let ok: FieldResult<()> = Ok(());
/// assert!(ok.is_valid());
/// assert_eq!(ok.message(), None);
///
/// let err: FieldResult<()> = Err(FieldError::validation("Passwords do not match"));
/// assert!(!err.is_valid());
/// assert_eq!(err.message(), Some("Passwords do not match"));
/// ```
pub trait FieldResultExt {
	fn is_valid(&self) -> bool;
	fn message(&self) -> Option<&str>;
}

impl<T> FieldResultExt for FieldResult<T> {
	fn is_valid(&self) -> bool {
		self.is_ok()
	}

	fn message(&self) -> Option<&str> {
		self.as_ref().err().map(FieldError::message)
	}
}
