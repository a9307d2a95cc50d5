//! What a submit handler returns

use crate::js::JsAction;
use crate::view::View;
use formward_forms::{AggregateError, ValidationError};
use serde::{Deserialize, Serialize};

/// An error shown to the user, inline on a field or for the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
	/// `None` for a form-level error
	pub field: Option<String>,
	pub message: String,
}

impl ErrorResult {
	pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: Some(field.into()),
			message: message.into(),
		}
	}

	pub fn form(message: impl Into<String>) -> Self {
		Self {
			field: None,
			message: message.into(),
		}
	}
}

impl From<ValidationError> for ErrorResult {
	fn from(err: ValidationError) -> Self {
		ErrorResult::field(err.field, err.message)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResult {
	pub title: String,
	pub message: Option<String>,
}

impl SuccessResult {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			message: None,
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

/// Outcome of a submission before it is resolved into a [`Response`](crate::Response)
///
/// # Examples
///
/// ```
/// use formward_submit::{ErrorResult, SubmitResult, js_input};
///
/// let result: SubmitResult = vec![
///     SubmitResult::from(ErrorResult::field("name", "Your name is not John!")),
///     SubmitResult::from(js_input("email").val("john@gmail.com")),
/// ].into();
///
/// assert!(result.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SubmitResult {
	Error(ErrorResult),
	Success(SuccessResult),
	View(View),
	Script(JsAction),
	ActionList(Vec<SubmitResult>),
}

impl SubmitResult {
	/// Field error shorthand
	pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
		SubmitResult::Error(ErrorResult::field(field, message))
	}

	pub fn form_error(message: impl Into<String>) -> Self {
		SubmitResult::Error(ErrorResult::form(message))
	}

	pub fn success(title: impl Into<String>) -> Self {
		SubmitResult::Success(SuccessResult::new(title))
	}

	/// Empty list, resolved to nothing at all
	pub fn nothing() -> Self {
		SubmitResult::ActionList(vec![])
	}

	/// Whether this result, or anything nested in it, is an error
	pub fn has_errors(&self) -> bool {
		match self {
			SubmitResult::Error(_) => true,
			SubmitResult::ActionList(items) => items.iter().any(SubmitResult::has_errors),
			_ => false,
		}
	}

	/// All errors in order, nested lists included
	pub fn errors(&self) -> Vec<&ErrorResult> {
		let mut out = vec![];
		self.collect_errors(&mut out);
		out
	}

	fn collect_errors<'a>(&'a self, out: &mut Vec<&'a ErrorResult>) {
		match self {
			SubmitResult::Error(err) => out.push(err),
			SubmitResult::ActionList(items) => {
				for item in items {
					item.collect_errors(out);
				}
			}
			_ => {}
		}
	}
}

impl From<ErrorResult> for SubmitResult {
	fn from(err: ErrorResult) -> Self {
		SubmitResult::Error(err)
	}
}

impl From<SuccessResult> for SubmitResult {
	fn from(success: SuccessResult) -> Self {
		SubmitResult::Success(success)
	}
}

impl From<View> for SubmitResult {
	fn from(view: View) -> Self {
		SubmitResult::View(view)
	}
}

impl From<JsAction> for SubmitResult {
	fn from(action: JsAction) -> Self {
		SubmitResult::Script(action)
	}
}

impl From<Vec<SubmitResult>> for SubmitResult {
	fn from(items: Vec<SubmitResult>) -> Self {
		SubmitResult::ActionList(items)
	}
}

/// One error per failing field; a single error stays unwrapped
impl From<AggregateError> for SubmitResult {
	fn from(errors: AggregateError) -> Self {
		let mut items: Vec<SubmitResult> = errors
			.into_inner()
			.into_iter()
			.map(|e| SubmitResult::Error(e.into()))
			.collect();
		if items.len() == 1 {
			items.remove(0)
		} else {
			SubmitResult::ActionList(items)
		}
	}
}
