//! Typecasting and presence checks for submitted values
//!
//! Every submitted value goes through [`normalize`] before it reaches the
//! model: it is cast to the field's declared type, checked against the
//! field's allowed values, then checked for presence.
//!
//! Presence rules:
//!
//! | value              | required | mandatory |
//! |--------------------|----------|-----------|
//! | absent / null      | error    | error     |
//! | blank string       | ok       | error     |
//! | `0` / `false`      | ok       | ok        |

use crate::field::{Field, FieldType};
use chrono::NaiveDate;
use formward_conf::FormSettings;
use serde_json::Value;
use std::fmt;

pub const MSG_REQUIRED: &str = "Must not be null";
pub const MSG_MANDATORY: &str = "Must not be empty";

/// A value that failed validation for one field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
	pub field: String,
	pub message: String,
}

impl ValidationError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

/// All validation errors of one submission, in field order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct AggregateError(pub Vec<ValidationError>);

impl AggregateError {
	pub fn errors(&self) -> &[ValidationError] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_inner(self) -> Vec<ValidationError> {
		self.0
	}
}

impl fmt::Display for AggregateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} field(s) failed validation", self.0.len())?;
		for error in &self.0 {
			write!(f, "; {}", error)?;
		}
		Ok(())
	}
}

/// Options applied while casting submitted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastOptions {
	pub trim_strings: bool,
	/// `chrono` formats tried in order for date fields
	pub date_formats: Vec<String>,
}

impl Default for CastOptions {
	fn default() -> Self {
		Self::from(&FormSettings::default())
	}
}

impl From<&FormSettings> for CastOptions {
	fn from(settings: &FormSettings) -> Self {
		Self {
			trim_strings: settings.trim_strings,
			date_formats: settings.date_formats.clone(),
		}
	}
}

/// Cast and check one submitted value.
///
/// `raw == None` means the key was not submitted at all. The result keeps
/// that distinction: `Ok(None)` is absent, `Ok(Some(Value::Null))` is null.
///
/// # Examples
///
/// ```
/// use formward_forms::{CastOptions, Field, FieldType, normalize};
/// use serde_json::json;
///
/// let field = Field::new("status", FieldType::Integer).required();
/// let opts = CastOptions::default();
///
/// assert_eq!(normalize(&field, Some(&json!("0")), &opts).unwrap(), Some(json!(0)));
/// assert!(normalize(&field, None, &opts).is_err());
/// assert!(normalize(&field, Some(&json!("abc")), &opts).is_err());
/// ```
pub fn normalize(
	field: &Field,
	raw: Option<&Value>,
	opts: &CastOptions,
) -> Result<Option<Value>, ValidationError> {
	let cast = match raw {
		None => None,
		Some(value) => Some(
			typecast(field, value, opts).map_err(|msg| ValidationError::new(&field.name, msg))?,
		),
	};

	let cast = match cast {
		Some(value) => Some(check_choices(field, value)?),
		None => None,
	};

	check_presence(field, cast.as_ref())?;
	Ok(cast)
}

fn typecast(field: &Field, value: &Value, opts: &CastOptions) -> Result<Value, String> {
	if value.is_null() {
		return Ok(Value::Null);
	}

	match field.field_type {
		FieldType::String | FieldType::Text => cast_string(value, opts),
		FieldType::Integer => cast_integer(value),
		FieldType::Boolean => cast_boolean(value),
		FieldType::Date => cast_date(value, opts),
	}
}

fn cast_string(value: &Value, opts: &CastOptions) -> Result<Value, String> {
	let s = match value {
		Value::String(s) => s.clone(),
		Value::Number(n) => n.to_string(),
		Value::Bool(b) => b.to_string(),
		_ => return Err("Must be a string".to_string()),
	};
	if opts.trim_strings {
		Ok(Value::String(s.trim().to_string()))
	} else {
		Ok(Value::String(s))
	}
}

fn cast_integer(value: &Value) -> Result<Value, String> {
	match value {
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				return Ok(Value::from(i));
			}
			match n.as_f64() {
				Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
					Ok(Value::from(f as i64))
				}
				_ => Err("Must be an integer".to_string()),
			}
		}
		Value::String(s) => {
			let s = s.trim();
			if s.is_empty() {
				return Ok(Value::Null);
			}
			s.parse::<i64>()
				.map(Value::from)
				.map_err(|_| "Must be an integer".to_string())
		}
		_ => Err("Must be an integer".to_string()),
	}
}

fn cast_boolean(value: &Value) -> Result<Value, String> {
	match value {
		Value::Bool(b) => Ok(Value::Bool(*b)),
		Value::Number(n) => match n.as_i64() {
			Some(0) => Ok(Value::Bool(false)),
			Some(1) => Ok(Value::Bool(true)),
			_ => Err("Must be a boolean".to_string()),
		},
		Value::String(s) => match s.trim().to_lowercase().as_str() {
			"" => Ok(Value::Null),
			"true" | "1" | "on" | "yes" => Ok(Value::Bool(true)),
			"false" | "0" | "off" | "no" => Ok(Value::Bool(false)),
			_ => Err("Must be a boolean".to_string()),
		},
		_ => Err("Must be a boolean".to_string()),
	}
}

fn cast_date(value: &Value, opts: &CastOptions) -> Result<Value, String> {
	let s = value
		.as_str()
		.ok_or_else(|| "Must be a date".to_string())?
		.trim();

	if s.is_empty() {
		return Ok(Value::Null);
	}

	opts.date_formats
		.iter()
		.find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
		.map(|date| Value::String(date.format("%Y-%m-%d").to_string()))
		.ok_or_else(|| "Must be a date".to_string())
}

/// Canonical key of a cast value, as used by [`Choices`](crate::Choices)
fn choice_key(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
		_ => None,
	}
}

fn check_choices(field: &Field, value: Value) -> Result<Value, ValidationError> {
	let Some(choices) = &field.values else {
		return Ok(value);
	};

	// An unselected dropdown submits an empty string
	if value.is_null() || value.as_str() == Some("") {
		return Ok(Value::Null);
	}

	match choice_key(&value) {
		Some(key) if choices.contains_key(&key) => Ok(value),
		_ => Err(ValidationError::new(
			&field.name,
			"Value is not one of the allowed values",
		)),
	}
}

fn check_presence(field: &Field, value: Option<&Value>) -> Result<(), ValidationError> {
	let missing = matches!(value, None | Some(Value::Null));

	if field.mandatory {
		let blank = matches!(value, Some(Value::String(s)) if s.trim().is_empty());
		if missing || blank {
			return Err(ValidationError::new(&field.name, MSG_MANDATORY));
		}
	} else if field.required && missing {
		return Err(ValidationError::new(&field.name, MSG_REQUIRED));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::Choices;
	use rstest::rstest;
	use serde_json::json;

	fn opts() -> CastOptions {
		CastOptions::default()
	}

	#[rstest]
	#[case(json!("  hello "), json!("hello"))]
	#[case(json!(12), json!("12"))]
	#[case(json!(false), json!("false"))]
	#[case(json!(""), json!(""))]
	fn test_string_cast(#[case] input: Value, #[case] expected: Value) {
		let field = Field::string("name");
		assert_eq!(normalize(&field, Some(&input), &opts()).unwrap(), Some(expected));
	}

	#[test]
	fn test_default_options_follow_settings() {
		let opts = opts();
		assert!(opts.trim_strings);
		assert_eq!(opts.date_formats, formward_conf::DEFAULT_DATE_FORMATS);
	}

	#[test]
	fn test_string_cast_without_trim() {
		let field = Field::string("name");
		let opts = CastOptions {
			trim_strings: false,
			..CastOptions::default()
		};
		assert_eq!(
			normalize(&field, Some(&json!(" a ")), &opts).unwrap(),
			Some(json!(" a "))
		);
	}

	#[rstest]
	#[case(json!("0"), Some(json!(0)))]
	#[case(json!(" 42 "), Some(json!(42)))]
	#[case(json!(7), Some(json!(7)))]
	#[case(json!(3.0), Some(json!(3)))]
	#[case(json!(""), Some(Value::Null))]
	fn test_integer_cast(#[case] input: Value, #[case] expected: Option<Value>) {
		let field = Field::new("n", FieldType::Integer);
		assert_eq!(normalize(&field, Some(&input), &opts()).unwrap(), expected);
	}

	#[rstest]
	#[case(json!("abc"))]
	#[case(json!(1.5))]
	#[case(json!(true))]
	#[case(json!([1]))]
	fn test_integer_type_mismatch(#[case] input: Value) {
		let field = Field::new("n", FieldType::Integer);
		let err = normalize(&field, Some(&input), &opts()).unwrap_err();
		assert_eq!(err, ValidationError::new("n", "Must be an integer"));
	}

	#[rstest]
	#[case(json!(true), json!(true))]
	#[case(json!("on"), json!(true))]
	#[case(json!("1"), json!(true))]
	#[case(json!("false"), json!(false))]
	#[case(json!(0), json!(false))]
	fn test_boolean_cast(#[case] input: Value, #[case] expected: Value) {
		let field = Field::new("b", FieldType::Boolean);
		assert_eq!(normalize(&field, Some(&input), &opts()).unwrap(), Some(expected));
	}

	#[rstest]
	#[case("2025-01-15")]
	#[case("01/15/2025")]
	#[case("Jan 15, 2025")]
	#[case("15 January 2025")]
	fn test_date_cast_to_iso(#[case] input: &str) {
		let field = Field::new("d", FieldType::Date);
		assert_eq!(
			normalize(&field, Some(&json!(input)), &opts()).unwrap(),
			Some(json!("2025-01-15"))
		);
	}

	#[test]
	fn test_date_invalid() {
		let field = Field::new("d", FieldType::Date);
		assert!(normalize(&field, Some(&json!("invalid-date")), &opts()).is_err());
	}

	#[rstest]
	#[case(None)]
	#[case(Some(Value::Null))]
	#[case(Some(json!("")))]
	fn test_required_integer_rejects_missing(#[case] input: Option<Value>) {
		let field = Field::new("status", FieldType::Integer).required();
		let err = normalize(&field, input.as_ref(), &opts()).unwrap_err();
		assert_eq!(err.field, "status");
		assert_eq!(err.message, MSG_REQUIRED);
	}

	#[test]
	fn test_required_accepts_blank_string_mandatory_does_not() {
		let required = Field::string("a").required();
		let mandatory = Field::string("b").mandatory();

		assert_eq!(
			normalize(&required, Some(&json!("  ")), &opts()).unwrap(),
			Some(json!(""))
		);
		let err = normalize(&mandatory, Some(&json!("  ")), &opts()).unwrap_err();
		assert_eq!(err.message, MSG_MANDATORY);
	}

	#[rstest]
	#[case(Field::new("n", FieldType::Integer).mandatory(), json!("0"), json!(0))]
	#[case(Field::new("b", FieldType::Boolean).mandatory(), json!(false), json!(false))]
	fn test_zero_and_false_are_present(
		#[case] field: Field,
		#[case] input: Value,
		#[case] expected: Value,
	) {
		assert_eq!(normalize(&field, Some(&input), &opts()).unwrap(), Some(expected));
	}

	#[test]
	fn test_mandatory_boolean_missing() {
		let field = Field::new("is_accept_terms", FieldType::Boolean).mandatory();
		let err = normalize(&field, None, &opts()).unwrap_err();
		assert_eq!(err.field, "is_accept_terms");
	}

	#[test]
	fn test_enum_values() {
		let choices: Choices = [(0, "noob"), (1, "pro"), (2, "dev")].into_iter().collect();
		let int_field = Field::new("s", FieldType::Integer).with_values(choices.clone());
		let str_field = Field::string("s").with_values(choices);

		assert_eq!(
			normalize(&int_field, Some(&json!("2")), &opts()).unwrap(),
			Some(json!(2))
		);
		assert_eq!(
			normalize(&str_field, Some(&json!("2")), &opts()).unwrap(),
			Some(json!("2"))
		);
		assert_eq!(
			normalize(&str_field, Some(&json!("")), &opts()).unwrap(),
			Some(Value::Null)
		);

		let err = normalize(&int_field, Some(&json!("5")), &opts()).unwrap_err();
		assert_eq!(err.message, "Value is not one of the allowed values");
	}

	#[test]
	fn test_aggregate_display() {
		let agg = AggregateError(vec![
			ValidationError::new("a", "Must not be null"),
			ValidationError::new("b", "Must be an integer"),
		]);
		assert_eq!(
			agg.to_string(),
			"2 field(s) failed validation; a: Must not be null; b: Must be an integer"
		);
	}
}
