//! Field declarations
//!
//! A [`Field`] describes one named value of a [`FormModel`](crate::FormModel):
//! its declared type, its presence rules and its default. Fields are declared
//! at form-build time and bound to a value at submit time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
	#[default]
	String,
	/// Multi-line string
	Text,
	Integer,
	Boolean,
	/// Calendar date, stored as an ISO 8601 string (`YYYY-MM-DD`)
	Date,
}

impl FieldType {
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldType::String => "string",
			FieldType::Text => "text",
			FieldType::Integer => "integer",
			FieldType::Boolean => "boolean",
			FieldType::Date => "date",
		}
	}
}

/// Ordered set of allowed values for an enum-of-values field.
///
/// Keys are kept in their canonical string form (`0`, `1`, `"pro"`) so the
/// same list can back a string-typed or an integer-typed field. The field's
/// declared type decides how a submitted key is cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Choices(IndexMap<String, String>);

impl Choices {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Build choices from a plain list of labels, keyed by position.
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::Choices;
	///
	/// let choices = Choices::from_labels(["Female", "Male"]);
	/// assert_eq!(choices.label("0"), Some("Female"));
	/// assert_eq!(choices.label("1"), Some("Male"));
	/// ```
	pub fn from_labels<I, L>(labels: I) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<String>,
	{
		labels
			.into_iter()
			.enumerate()
			.map(|(i, label)| (i.to_string(), label.into()))
			.collect()
	}

	pub fn insert(&mut self, key: impl ToString, label: impl Into<String>) {
		self.0.insert(key.to_string(), label.into());
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn label(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: ToString, L: Into<String>> FromIterator<(K, L)> for Choices {
	fn from_iter<T: IntoIterator<Item = (K, L)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, l)| (k.to_string(), l.into()))
				.collect(),
		)
	}
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	#[serde(rename = "type")]
	pub field_type: FieldType,
	pub caption: Option<String>,
	/// Value must be present and non-null
	pub required: bool,
	/// Value must be present, non-null and non-blank
	pub mandatory: bool,
	/// `None` means no default; `Some(Value::Null)` is an explicit null default.
	pub default: Option<Value>,
	pub values: Option<Choices>,
	/// Submitted input is ignored for read-only fields
	pub read_only: bool,
	/// System fields (such as a record id) get no control and are skipped by
	/// handlers that walk the user-facing fields.
	pub system: bool,
}

impl Field {
	/// Create a new field of the given type
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Field, FieldType};
	///
	/// let field = Field::new("email", FieldType::String);
	/// assert_eq!(field.name, "email");
	/// assert!(!field.required);
	/// assert!(!field.mandatory);
	/// assert_eq!(field.default, None);
	/// ```
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			caption: None,
			required: false,
			mandatory: false,
			default: None,
			values: None,
			read_only: false,
			system: false,
		}
	}

	pub fn string(name: impl Into<String>) -> Self {
		Self::new(name, FieldType::String)
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn mandatory(mut self) -> Self {
		self.mandatory = true;
		self
	}

	/// Set the default value.
	///
	/// Zero and null are kept as real defaults:
	///
	/// ```
	/// use formward_forms::{Field, FieldType};
	/// use serde_json::{Value, json};
	///
	/// let zero = Field::new("level", FieldType::Integer).with_default(0);
	/// assert_eq!(zero.default, Some(json!(0)));
	///
	/// let null = Field::string("note").with_default(Value::Null);
	/// assert_eq!(null.default, Some(Value::Null));
	/// ```
	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = Some(default.into());
		self
	}

	pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());
		self
	}

	pub fn with_values(mut self, values: Choices) -> Self {
		self.values = Some(values);
		self
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn system(mut self) -> Self {
		self.system = true;
		self
	}

	/// Whether this is an enum-of-values field
	pub fn is_enum(&self) -> bool {
		self.values.is_some()
	}

	/// Caption used for display: the explicit caption, or the name made readable
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::Field;
	///
	/// assert_eq!(Field::string("first_name").caption(), "First Name");
	/// assert_eq!(Field::string("code").with_caption("Post Code").caption(), "Post Code");
	/// ```
	pub fn caption(&self) -> String {
		match &self.caption {
			Some(caption) => caption.clone(),
			None => readable_caption(&self.name),
		}
	}
}

/// Optional settings used when a control creates its own field.
///
/// Anything left unset falls back to what the control implies (a checkbox
/// implies a boolean field, a calendar a date field, and so on).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
	pub field_type: Option<FieldType>,
	pub caption: Option<String>,
	pub required: bool,
	pub mandatory: bool,
	pub default: Option<Value>,
	pub values: Option<Choices>,
}

impl FieldOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn typed(field_type: FieldType) -> Self {
		Self {
			field_type: Some(field_type),
			..Self::default()
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn mandatory(mut self) -> Self {
		self.mandatory = true;
		self
	}

	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = Some(default.into());
		self
	}

	pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());
		self
	}

	pub fn with_values(mut self, values: Choices) -> Self {
		self.values = Some(values);
		self
	}

	pub(crate) fn into_field(self, name: &str, implied: FieldType) -> Field {
		Field {
			name: name.to_string(),
			field_type: self.field_type.unwrap_or(implied),
			caption: self.caption,
			required: self.required,
			mandatory: self.mandatory,
			default: self.default,
			values: self.values,
			read_only: false,
			system: false,
		}
	}
}

/// Turn `snake_case` or `camelCase` names into a readable caption
pub(crate) fn readable_caption(name: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut prev_lower = false;

	for ch in name.chars() {
		if ch == '_' || ch == '-' || ch == ' ' {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			prev_lower = false;
			continue;
		}
		if ch.is_uppercase() && prev_lower && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
		current.push(ch);
	}
	if !current.is_empty() {
		words.push(current);
	}

	words
		.iter()
		.map(|w| {
			let mut chars = w.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}
