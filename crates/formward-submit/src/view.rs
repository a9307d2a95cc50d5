//! Views a handler can return in place of the form output

use serde::{Deserialize, Serialize};

/// An arbitrary renderable returned by a handler.
///
/// Only the structure is kept; turning it into markup is up to the hosting
/// UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
	/// Message box with a header and a body
	Message {
		header: String,
		paragraphs: Vec<String>,
	},
	/// Modal dialog wrapping another view
	Modal {
		title: String,
		class: Option<String>,
		content: Box<View>,
	},
	Text { text: String },
}

impl View {
	/// Message box with no body yet
	///
	/// # Examples
	///
	/// ```
	/// use formward_submit::View;
	///
	/// let view = View::message("some header").paragraph("some text 42");
	/// let modal = View::modal("Something happen", view).with_class("ui modal tiny");
	///
	/// match modal {
	///     View::Modal { title, class, .. } => {
	///         assert_eq!(title, "Something happen");
	///         assert_eq!(class.as_deref(), Some("ui modal tiny"));
	///     }
	///     _ => unreachable!(),
	/// }
	/// ```
	pub fn message(header: impl Into<String>) -> Self {
		View::Message {
			header: header.into(),
			paragraphs: vec![],
		}
	}

	pub fn modal(title: impl Into<String>, content: View) -> Self {
		View::Modal {
			title: title.into(),
			class: None,
			content: Box::new(content),
		}
	}

	pub fn text(text: impl Into<String>) -> Self {
		View::Text { text: text.into() }
	}

	/// Append a paragraph to a message box; other views are returned unchanged
	pub fn paragraph(mut self, text: impl Into<String>) -> Self {
		if let View::Message { paragraphs, .. } = &mut self {
			paragraphs.push(text.into());
		}
		self
	}

	/// Set the CSS class of a modal; other views are returned unchanged
	pub fn with_class(mut self, ui: impl Into<String>) -> Self {
		if let View::Modal { class, .. } = &mut self {
			*class = Some(ui.into());
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_paragraph_only_applies_to_messages() {
		assert_eq!(View::text("x").paragraph("y"), View::text("x"));
	}

	#[test]
	fn test_nested_serialization() {
		let view = View::modal("t", View::message("h").paragraph("p"));
		assert_eq!(
			serde_json::to_value(&view).unwrap(),
			json!({
				"view": "modal",
				"title": "t",
				"class": null,
				"content": {"view": "message", "header": "h", "paragraphs": ["p"]}
			})
		);
	}
}
