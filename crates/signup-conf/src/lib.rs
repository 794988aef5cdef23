//! # Signup settings
//!
//! Configuration for the signup form core. Settings come from three layers,
//! later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`SignupSettings::default`])
//! 2. A TOML file ([`SignupSettings::from_file`])
//! 3. Environment variables prefixed with `SIGNUP_` ([`SignupSettings::with_env`])
//!
//! ## Example
//!
//! ```
//! use signup_conf::SignupSettings;
//! use std::time::Duration;
//!
//! let settings = SignupSettings::from_toml_str("submit_delay_ms = 500").unwrap();
//! assert_eq!(settings.submit_delay(), Duration::from_millis(500));
//! assert_eq!(settings.toast_duration(), Duration::from_millis(4500));
//! ```

pub mod settings;

pub use settings::{
	ENV_PASSWORD_MIN_LENGTH, ENV_SUBMIT_DELAY_MS, ENV_TOAST_DURATION_MS, SettingsError,
	SettingsResult, SignupSettings,
};
