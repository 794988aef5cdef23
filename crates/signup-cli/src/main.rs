//! Signup CLI
//!
//! Drives the signup form core from the terminal. Each callback the
//! controller makes on the view layer is printed as one line.
//!
//! ## Usage
//!
//! ```bash
//! signup submit --name "Alice Smith" --email alice@example.com \
//!     --mobile 9998887776 --password 'Abc12345!' --confirm-password 'Abc12345!'
//! signup strength 'Abc12345!'
//! signup check mobile 5998887776
//! ```

mod terminal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use signup_conf::SignupSettings;
use signup_forms::{StrengthMeter, SubmissionController, SubmissionOutcome};
use signup_validators::{
	FieldId, FieldValidator, PasswordLengthValidator, SignupData, validate_confirm_password,
	validate_email, validate_mobile, validate_name,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use terminal::{TerminalView, render_meter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(about = "Validate and submit a signup form from the terminal", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Path to a TOML settings file
	#[arg(short, long, global = true, value_name = "PATH")]
	settings: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Run one full submission cycle
	Submit {
		#[arg(long, default_value = "")]
		name: String,

		#[arg(long, default_value = "")]
		email: String,

		#[arg(long, default_value = "")]
		mobile: String,

		#[arg(long, default_value = "")]
		password: String,

		#[arg(long, default_value = "")]
		confirm_password: String,
	},

	/// Show the strength meter for a password
	Strength {
		#[arg(value_name = "PASSWORD")]
		password: String,
	},

	/// Validate a single field
	Check {
		/// Field id: username, email, mobile, password or c-password
		#[arg(value_name = "FIELD")]
		field: FieldId,

		#[arg(value_name = "VALUE")]
		value: String,

		/// Password to compare against when checking c-password
		#[arg(long, default_value = "")]
		password: String,
	},
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let result = match load_settings(cli.settings.as_deref()) {
		Ok(settings) => run(cli.command, settings).await,
		Err(e) => Err(e),
	};

	match result {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			eprintln!("{} {:#}", "Error:".red().bold(), e);
			process::exit(2);
		}
	}
}

fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn load_settings(path: Option<&std::path::Path>) -> anyhow::Result<SignupSettings> {
	let settings = match path {
		Some(path) => SignupSettings::from_file(path)
			.with_context(|| format!("loading settings from {}", path.display()))?,
		None => SignupSettings::default(),
	};
	settings
		.with_process_env()
		.context("applying SIGNUP_* environment overrides")
}

/// Returns `Ok(false)` when the input was rejected.
async fn run(command: Commands, settings: SignupSettings) -> anyhow::Result<bool> {
	match command {
		Commands::Submit {
			name,
			email,
			mobile,
			password,
			confirm_password,
		} => {
			let data = SignupData::new(name, email, mobile, password, confirm_password);
			let view = Arc::new(TerminalView::new(std::io::stdout(), settings.clone()));
			let controller = SubmissionController::new(view.clone(), settings);

			controller.password_input(&data.password);
			let outcome = controller.submit(&data).await;
			tracing::debug!(
				live_toasts = view.live_toasts(Instant::now()),
				"Submission cycle finished"
			);
			Ok(matches!(outcome, SubmissionOutcome::Succeeded))
		}
		Commands::Strength { password } => {
			println!("{}", render_meter(&StrengthMeter::for_password(&password)));
			Ok(true)
		}
		Commands::Check {
			field,
			value,
			password,
		} => {
			let result = match field {
				FieldId::Name => validate_name(&value),
				FieldId::Email => validate_email(&value),
				FieldId::Mobile => validate_mobile(&value),
				FieldId::Password => PasswordLengthValidator::new()
					.with_min_length(settings.password_min_length)
					.validate(&value),
				FieldId::ConfirmPassword => validate_confirm_password(&password, &value),
			};
			match result {
				Ok(()) => {
					println!("{} {}", "✓".green(), field.label());
					Ok(true)
				}
				Err(error) => {
					println!("{} {}: {}", "✗".red(), field.label(), error);
					Ok(false)
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use rstest::rstest;

	#[rstest]
	fn test_cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[rstest]
	fn test_parse_check_field_id() {
		// Act
		let cli = Cli::try_parse_from(["signup", "check", "c-password", "x", "--password", "x"])
			.unwrap();

		// Assert
		match cli.command {
			Commands::Check { field, .. } => assert_eq!(field, FieldId::ConfirmPassword),
			_ => panic!("Expected check subcommand"),
		}
	}

	#[rstest]
	fn test_parse_unknown_field_fails() {
		assert!(Cli::try_parse_from(["signup", "check", "phone", "123"]).is_err());
	}

	#[rstest]
	#[tokio::test]
	async fn test_check_command_result() {
		// Arrange
		let ok = Commands::Check {
			field: FieldId::Mobile,
			value: "9998887776".to_string(),
			password: String::new(),
		};
		let bad = Commands::Check {
			field: FieldId::Mobile,
			value: "5998887776".to_string(),
			password: String::new(),
		};

		// Act
		let ok = run(ok, SignupSettings::default()).await.unwrap();
		let bad = run(bad, SignupSettings::default()).await.unwrap();

		// Assert
		assert!(ok);
		assert!(!bad);
	}

	fn submit_command(mobile: &str) -> Commands {
		Commands::Submit {
			name: "Alice Smith".to_string(),
			email: "alice@example.com".to_string(),
			mobile: mobile.to_string(),
			password: "Abc12345!".to_string(),
			confirm_password: "Abc12345!".to_string(),
		}
	}

	#[rstest]
	#[case("9998887776", true)]
	#[case("5998887776", false)]
	#[tokio::test(start_paused = true)]
	async fn test_submit_command_result(#[case] mobile: &str, #[case] expected: bool) {
		// Arrange
		let command = submit_command(mobile);

		// Act
		let accepted = run(command, SignupSettings::default()).await.unwrap();

		// Assert
		assert_eq!(accepted, expected);
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_submit_command_waits_for_delay() {
		// Arrange
		let started = tokio::time::Instant::now();

		// Act
		let accepted = run(submit_command("9998887776"), SignupSettings::default())
			.await
			.unwrap();

		// Assert
		assert!(accepted);
		assert!(started.elapsed() >= std::time::Duration::from_millis(2000));
	}
}
