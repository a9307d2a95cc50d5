//! Controls: UI inputs bound to one field each

use crate::field::{Choices, FieldType};
use serde::{Deserialize, Serialize};

/// Kind of input a control renders as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
	Line,
	Textarea,
	Dropdown { values: Choices },
	Calendar,
	Checkbox,
}

impl ControlKind {
	/// Field type a control implies when it has to create its own field
	pub fn implied_type(&self) -> FieldType {
		match self {
			ControlKind::Textarea => FieldType::Text,
			ControlKind::Calendar => FieldType::Date,
			ControlKind::Checkbox => FieldType::Boolean,
			ControlKind::Line | ControlKind::Dropdown { .. } => FieldType::String,
		}
	}
}

/// Column width in a sixteen-column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Width(u8);

const WIDTH_WORDS: [&str; 16] = [
	"one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
	"twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

impl Width {
	pub const TWO: Width = Width(2);
	pub const THREE: Width = Width(3);
	pub const FOUR: Width = Width(4);
	pub const FIVE: Width = Width(5);
	pub const EIGHT: Width = Width(8);
	pub const TWELVE: Width = Width(12);

	/// Width of `columns` columns, if it fits the grid
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::Width;
	///
	/// assert_eq!(Width::columns(12).unwrap().as_word(), "twelve");
	/// assert!(Width::columns(0).is_none());
	/// assert!(Width::columns(17).is_none());
	/// ```
	pub fn columns(columns: u8) -> Option<Width> {
		(1..=16).contains(&columns).then_some(Width(columns))
	}

	pub fn get(&self) -> u8 {
		self.0
	}

	pub fn as_word(&self) -> &'static str {
		WIDTH_WORDS[(self.0 - 1) as usize]
	}
}

impl TryFrom<u8> for Width {
	type Error = String;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		Width::columns(value).ok_or_else(|| format!("width {} is outside 1..=16", value))
	}
}

impl From<Width> for u8 {
	fn from(width: Width) -> Self {
		width.0
	}
}

/// A control declaration
///
/// # Examples
///
/// ```
/// use formward_forms::{Control, ControlKind, Width};
///
/// let control = Control::line().width(Width::THREE).disabled();
/// assert_eq!(control.kind, ControlKind::Line);
/// assert!(control.disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
	#[serde(flatten)]
	pub kind: ControlKind,
	pub caption: Option<String>,
	pub width: Option<Width>,
	/// Disabled controls ignore submitted input
	pub disabled: bool,
}

impl Control {
	pub fn new(kind: ControlKind) -> Self {
		Self {
			kind,
			caption: None,
			width: None,
			disabled: false,
		}
	}

	pub fn line() -> Self {
		Self::new(ControlKind::Line)
	}

	pub fn textarea() -> Self {
		Self::new(ControlKind::Textarea)
	}

	pub fn dropdown(values: Choices) -> Self {
		Self::new(ControlKind::Dropdown { values })
	}

	pub fn calendar() -> Self {
		Self::new(ControlKind::Calendar)
	}

	pub fn checkbox() -> Self {
		Self::new(ControlKind::Checkbox)
	}

	pub fn caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());
		self
	}

	pub fn width(mut self, width: Width) -> Self {
		self.width = Some(width);
		self
	}

	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}

	/// Values offered by a dropdown, if any
	pub fn choices(&self) -> Option<&Choices> {
		match &self.kind {
			ControlKind::Dropdown { values } if !values.is_empty() => Some(values),
			_ => None,
		}
	}
}
