//! Settings type, loaders and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_SUBMIT_DELAY_MS: &str = "SIGNUP_SUBMIT_DELAY_MS";
pub const ENV_TOAST_DURATION_MS: &str = "SIGNUP_TOAST_DURATION_MS";
pub const ENV_PASSWORD_MIN_LENGTH: &str = "SIGNUP_PASSWORD_MIN_LENGTH";

/// Errors raised while loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Failed to serialize settings: {0}")]
	Serialize(#[from] toml::ser::Error),
	#[error("Invalid value for {key}: {reason}")]
	InvalidValue { key: String, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Tunables of the signup form core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignupSettings {
	/// How long the simulated submission stays in the loading state.
	pub submit_delay_ms: u64,
	/// How long a toast stays on screen before it is removed.
	pub toast_duration_ms: u64,
	/// Minimum password length accepted by the password check.
	pub password_min_length: usize,
	/// Toast text after a successful submission.
	pub success_message: String,
	/// Toast text after a submission with invalid fields.
	pub failure_message: String,
}

impl Default for SignupSettings {
	fn default() -> Self {
		Self {
			submit_delay_ms: 2000,
			toast_duration_ms: 4500,
			password_min_length: 8,
			success_message: "Account created successfully!".to_string(),
			failure_message: "Please fix the errors below.".to_string(),
		}
	}
}

impl SignupSettings {
	/// Parse settings from TOML text; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::SignupSettings;
	///
	/// let settings = SignupSettings::from_toml_str("password_min_length = 10").unwrap();
	/// assert_eq!(settings.password_min_length, 10);
	/// assert_eq!(settings.submit_delay_ms, 2000);
	///
	/// assert!(SignupSettings::from_toml_str("password_min_length = 0").is_err());
	/// ```
	pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(text)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), "Loaded signup settings");
		Ok(settings)
	}

	/// Apply `SIGNUP_*` overrides read through `lookup`.
	///
	/// `lookup` maps a variable name to its value; [`SignupSettings::with_process_env`]
	/// passes `std::env::var`.
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::{ENV_SUBMIT_DELAY_MS, SignupSettings};
	///
	/// let settings = SignupSettings::default()
	///     .with_env(|key| (key == ENV_SUBMIT_DELAY_MS).then(|| "250".to_string()))
	///     .unwrap();
	/// assert_eq!(settings.submit_delay_ms, 250);
	/// ```
	pub fn with_env<F>(mut self, lookup: F) -> SettingsResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(raw) = lookup(ENV_SUBMIT_DELAY_MS) {
			self.submit_delay_ms = parse_env(ENV_SUBMIT_DELAY_MS, &raw)?;
		}
		if let Some(raw) = lookup(ENV_TOAST_DURATION_MS) {
			self.toast_duration_ms = parse_env(ENV_TOAST_DURATION_MS, &raw)?;
		}
		if let Some(raw) = lookup(ENV_PASSWORD_MIN_LENGTH) {
			self.password_min_length = parse_env(ENV_PASSWORD_MIN_LENGTH, &raw)?;
		}
		self.validate()?;
		Ok(self)
	}

	/// Apply overrides from the process environment.
	pub fn with_process_env(self) -> SettingsResult<Self> {
		self.with_env(|key| std::env::var(key).ok())
	}

	/// Reject values the controller cannot work with.
	pub fn validate(&self) -> SettingsResult<()> {
		if self.password_min_length == 0 {
			return Err(SettingsError::InvalidValue {
				key: "password_min_length".to_string(),
				reason: "must be at least 1".to_string(),
			});
		}
		if self.toast_duration_ms == 0 {
			return Err(SettingsError::InvalidValue {
				key: "toast_duration_ms".to_string(),
				reason: "must be greater than zero".to_string(),
			});
		}
		if self.success_message.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "success_message".to_string(),
				reason: "must not be blank".to_string(),
			});
		}
		if self.failure_message.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "failure_message".to_string(),
				reason: "must not be blank".to_string(),
			});
		}
		Ok(())
	}

	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms)
	}

	pub fn toast_duration(&self) -> Duration {
		Duration::from_millis(self.toast_duration_ms)
	}

	/// Serialize back to TOML.
	pub fn to_toml_string(&self) -> SettingsResult<String> {
		Ok(toml::to_string_pretty(self)?)
	}
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> SettingsResult<T>
where
	T::Err: std::fmt::Display,
{
	raw.trim()
		.parse()
		.map_err(|e: T::Err| SettingsError::InvalidValue {
			key: key.to_string(),
			reason: e.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_are_valid() {
		// Arrange
		let settings = SignupSettings::default();

		// Act + Assert
		assert!(settings.validate().is_ok());
		assert_eq!(settings.submit_delay(), Duration::from_millis(2000));
		assert_eq!(settings.toast_duration(), Duration::from_millis(4500));
		assert_eq!(settings.password_min_length, 8);
	}

	#[rstest]
	fn test_empty_toml_gives_defaults() {
		// Act
		let settings = SignupSettings::from_toml_str("").unwrap();

		// Assert
		assert_eq!(settings, SignupSettings::default());
	}

	#[rstest]
	fn test_unknown_key_rejected() {
		// Act
		let result = SignupSettings::from_toml_str("retry_count = 3");

		// Assert
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	#[case("password_min_length = 0", "password_min_length")]
	#[case("toast_duration_ms = 0", "toast_duration_ms")]
	#[case("success_message = \"  \"", "success_message")]
	#[case("failure_message = \"\"", "failure_message")]
	fn test_invalid_values(#[case] toml_text: &str, #[case] expected_key: &str) {
		// Act
		let result = SignupSettings::from_toml_str(toml_text);

		// Assert
		match result {
			Err(SettingsError::InvalidValue { key, .. }) => assert_eq!(key, expected_key),
			other => panic!("Expected InvalidValue for {expected_key}, got {other:?}"),
		}
	}

	#[rstest]
	fn test_zero_submit_delay_allowed() {
		// Act
		let settings = SignupSettings::from_toml_str("submit_delay_ms = 0").unwrap();

		// Assert
		assert_eq!(settings.submit_delay(), Duration::ZERO);
	}

	#[rstest]
	fn test_env_overrides() {
		// Arrange
		let lookup = |key: &str| match key {
			ENV_SUBMIT_DELAY_MS => Some("100".to_string()),
			ENV_TOAST_DURATION_MS => Some(" 900 ".to_string()),
			ENV_PASSWORD_MIN_LENGTH => Some("12".to_string()),
			_ => None,
		};

		// Act
		let settings = SignupSettings::default().with_env(lookup).unwrap();

		// Assert
		assert_eq!(settings.submit_delay_ms, 100);
		assert_eq!(settings.toast_duration_ms, 900);
		assert_eq!(settings.password_min_length, 12);
	}

	#[rstest]
	fn test_env_override_not_a_number() {
		// Act
		let result = SignupSettings::default()
			.with_env(|key| (key == ENV_SUBMIT_DELAY_MS).then(|| "soon".to_string()));

		// Assert
		match result {
			Err(SettingsError::InvalidValue { key, .. }) => assert_eq!(key, ENV_SUBMIT_DELAY_MS),
			other => panic!("Expected InvalidValue, got {other:?}"),
		}
	}

	#[rstest]
	fn test_toml_round_trip() {
		// Arrange
		let settings = SignupSettings {
			submit_delay_ms: 10,
			..SignupSettings::default()
		};

		// Act
		let text = settings.to_toml_string().unwrap();
		let parsed = SignupSettings::from_toml_str(&text).unwrap();

		// Assert
		assert!(text.contains("submit_delay_ms = 10"));
		assert_eq!(parsed, settings);
	}
}
