//! # Signup
//!
//! Core of a client-side signup form: field validation, a password strength
//! meter, and a simulated submission with a loading state.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`validators`] - pure field checks and strength scoring (always included)
//! - [`forms`] - submission state machine and the [`forms::FormView`] contract (`forms` feature)
//! - [`conf`] - TOML/env settings (`conf` feature)
//!
//! ## Feature Flags
//!
//! - `forms` - submission controller and view models
//! - `conf` - settings loading
//! - `full` (default) - everything; `--no-default-features` leaves validators only
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use signup::prelude::*;
//! use std::sync::Arc;
//!
//! let controller = SubmissionController::new(Arc::new(MyView), SignupSettings::default());
//! controller.password_input("Abc12345!");
//! let data = SignupData::new("Alice Smith", "alice@example.com", "9998887776", "Abc12345!", "Abc12345!");
//! assert!(controller.submit(&data).await.is_success());
//! ```

pub use signup_validators as validators;

#[cfg(feature = "forms")]
pub use signup_forms as forms;

#[cfg(feature = "conf")]
pub use signup_conf as conf;

/// Commonly used types in one import
pub mod prelude {
	pub use signup_validators::{
		FieldError, FieldId, FieldResult, FieldResultExt, FieldValidator, SignupData,
		StrengthLevel, StrengthScore, ValidationReport, score, validate_all,
	};

	#[cfg(feature = "forms")]
	pub use signup_forms::{
		FormView, NotificationKind, PasswordVisibility, StrengthMeter, SubmissionController,
		SubmissionOutcome, SubmissionState, Toast, ToastQueue,
	};

	#[cfg(feature = "conf")]
	pub use signup_conf::{SettingsError, SignupSettings};
}
