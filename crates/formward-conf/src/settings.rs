//! Typed settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the dispatcher does with an error raised by a submit handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerErrorPolicy {
	/// Turn the error into a form-level error result shown to the user
	#[default]
	Convert,
	/// Fail the request with the handler error
	Fatal,
}

impl FromStr for HandlerErrorPolicy {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"convert" => Ok(HandlerErrorPolicy::Convert),
			"fatal" => Ok(HandlerErrorPolicy::Fatal),
			other => Err(format!(
				"unknown handler error policy '{}' (expected 'convert' or 'fatal')",
				other
			)),
		}
	}
}

impl fmt::Display for HandlerErrorPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HandlerErrorPolicy::Convert => f.write_str("convert"),
			HandlerErrorPolicy::Fatal => f.write_str("fatal"),
		}
	}
}

/// `[submit]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitSettings {
	pub handler_errors: HandlerErrorPolicy,
	/// Include the handler error text and its context in the message shown
	/// to the user
	pub expose_error_details: bool,
	/// Ask the client to reset the form after a success notification
	pub reset_on_success: bool,
}

impl Default for SubmitSettings {
	fn default() -> Self {
		Self {
			handler_errors: HandlerErrorPolicy::Convert,
			expose_error_details: false,
			reset_on_success: false,
		}
	}
}

/// Date formats tried when none are configured
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
	"%Y-%m-%d", // 2025-01-15
	"%m/%d/%Y", // 01/15/2025
	"%b %d, %Y", // Jan 15, 2025
	"%d %b %Y", // 15 Jan 2025
	"%B %d, %Y", // January 15, 2025
	"%d %B %Y", // 15 January 2025
];

/// `[forms]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	pub trim_strings: bool,
	/// `chrono` format strings tried in order when casting dates
	pub date_formats: Vec<String>,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			trim_strings: true,
			date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
		}
	}
}

/// All Formward settings
///
/// # Examples
///
/// ```
/// use formward_conf::{HandlerErrorPolicy, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(settings.submit.handler_errors, HandlerErrorPolicy::Convert);
/// assert!(settings.forms.trim_strings);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub submit: SubmitSettings,
	pub forms: FormSettings,
}

impl Settings {
	/// Parse settings from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use formward_conf::{HandlerErrorPolicy, Settings};
	///
	/// let settings = Settings::from_toml_str(r#"
	/// [submit]
	/// handler_errors = "fatal"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.submit.handler_errors, HandlerErrorPolicy::Fatal);
	/// assert!(!settings.submit.expose_error_details);
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("convert", HandlerErrorPolicy::Convert)]
	#[case("Fatal", HandlerErrorPolicy::Fatal)]
	#[case(" FATAL ", HandlerErrorPolicy::Fatal)]
	fn test_policy_from_str(#[case] input: &str, #[case] expected: HandlerErrorPolicy) {
		assert_eq!(input.parse::<HandlerErrorPolicy>().unwrap(), expected);
	}

	#[test]
	fn test_policy_from_str_invalid() {
		assert!("crash".parse::<HandlerErrorPolicy>().is_err());
	}

	#[test]
	fn test_empty_toml_is_default() {
		assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
	}

	#[test]
	fn test_toml_forms_section() {
		let settings = Settings::from_toml_str(
			r#"
			[forms]
			trim_strings = false
			date_formats = ["%d.%m.%Y"]
			"#,
		)
		.unwrap();

		assert!(!settings.forms.trim_strings);
		assert_eq!(settings.forms.date_formats, vec!["%d.%m.%Y".to_string()]);
		assert_eq!(settings.submit, SubmitSettings::default());
	}
}
