//! Signup form submission for the view layer
//!
//! This crate drives one signup form: it scores the password as the user
//! types, validates every field on submit, and runs a simulated submission
//! with a loading state. All rendering is delegated to a [`FormView`]
//! implementation supplied by the host.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  SignupData / password  ┌──────────────────────┐
//! │ view layer │ ───────────────────────►│ SubmissionController │
//! │ (FormView) │ ◄───────────────────────│  Idle → Validating   │
//! └────────────┘   callbacks (FormView)  │  → Loading → ...     │
//!                                        └──────────┬───────────┘
//!                                                   │
//!                                                   ▼
//!                                        ┌──────────────────────┐
//!                                        │  signup-validators   │
//!                                        └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use signup_forms::{SubmissionController, SubmissionOutcome};
//! use signup_validators::SignupData;
//! use std::sync::Arc;
//!
//! let controller = SubmissionController::new(Arc::new(my_view), settings);
//! controller.password_input("Abc12345!");
//! match controller.submit(&data).await {
//!     SubmissionOutcome::Succeeded => {}
//!     SubmissionOutcome::Invalid(report) => {}
//!     SubmissionOutcome::Rejected => {}
//! }
//! ```

pub mod controller;
pub mod meter;
pub mod toast;
pub mod view;
pub mod visibility;

pub use controller::{SubmissionController, SubmissionOutcome, SubmissionState};
pub use meter::StrengthMeter;
pub use toast::{Toast, ToastQueue};
pub use view::{FormView, NotificationKind};
pub use visibility::PasswordVisibility;
