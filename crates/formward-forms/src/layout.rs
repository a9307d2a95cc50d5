//! Form layout: headers, grouped controls and buttons

use crate::control::Width;
use serde::{Deserialize, Serialize};

/// One entry of a form's layout, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum LayoutItem {
	Header { title: String },
	Control { name: String },
	Group(Group),
}

/// Controls laid out together on one row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
	#[serde(flatten)]
	pub options: GroupOptions,
	pub controls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOptions {
	pub title: Option<String>,
	/// Equal width of every control in the group
	pub width: Option<Width>,
	/// Render the label inline with the controls
	pub inline: bool,
}

impl GroupOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn titled(title: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			..Self::default()
		}
	}

	pub fn width(mut self, width: Width) -> Self {
		self.width = Some(width);
		self
	}

	pub fn inline(mut self) -> Self {
		self.inline = true;
		self
	}
}

/// The form's submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
	pub caption: String,
	pub icon: Option<String>,
	pub secondary: bool,
}

impl Button {
	pub fn new(caption: impl Into<String>) -> Self {
		Self {
			caption: caption.into(),
			icon: None,
			secondary: false,
		}
	}

	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn secondary(mut self) -> Self {
		self.secondary = true;
		self
	}
}

impl Default for Button {
	fn default() -> Self {
		Self::new("Save")
	}
}
