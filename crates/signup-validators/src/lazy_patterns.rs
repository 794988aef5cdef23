//! Compiled regex patterns shared by the field validators.

use regex::Regex;
use std::sync::LazyLock;

// Letters and whitespace only, at least three of them.
pub(crate) static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z\s]{3,}$").expect("NAME_REGEX: invalid regex pattern")
});

// Local part is either dot-separated atoms free of specials or a quoted
// string. Domain is a bracketed IPv4 literal or dotted labels ending in a
// TLD of two or more letters.
pub(crate) static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

// Indian mobile format: ten digits, leading 6-9.
pub(crate) static MOBILE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("MOBILE_REGEX: invalid regex pattern"));
