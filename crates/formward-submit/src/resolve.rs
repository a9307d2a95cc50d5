//! Resolving a [`SubmitResult`] into the one response a submission gets

use crate::js::JsAction;
use crate::result::{ErrorResult, SubmitResult};
use crate::view::View;
use formward_conf::Settings;
use serde::{Deserialize, Serialize};

/// What the UI layer is asked to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum Response {
	/// Show the form again with the errors attached to their fields
	Redisplay { errors: Vec<ErrorResult> },
	/// Transient success notification
	Notify {
		title: String,
		message: Option<String>,
		reset: bool,
	},
	/// Replace the form output
	Replace { view: View },
	Script { actions: Vec<JsAction> },
	Sequence { responses: Vec<Response> },
	Nothing,
}

/// Turns handler results into responses
#[derive(Debug, Clone, Default)]
pub struct Resolver {
	reset_on_success: bool,
}

impl Resolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			reset_on_success: settings.submit.reset_on_success,
		}
	}

	pub fn with_reset_on_success(mut self, reset: bool) -> Self {
		self.reset_on_success = reset;
		self
	}

	/// Resolve one result.
	///
	/// Any error anywhere in the result wins: the outcome is a redisplay
	/// carrying every error, in order. Otherwise actions are resolved in
	/// order, nested lists flattened, and adjacent scripts merged.
	///
	/// # Examples
	///
	/// ```
	/// use formward_submit::{Resolver, Response, SubmitResult, js_control, js_input};
	///
	/// let result = SubmitResult::ActionList(vec![
	///     js_input("email").val("john@gmail.com").into(),
	///     js_control("is_accept_terms").checkbox("set checked").into(),
	/// ]);
	///
	/// match Resolver::new().resolve(result) {
	///     Response::Script { actions } => assert_eq!(actions.len(), 2),
	///     other => panic!("unexpected {:?}", other),
	/// }
	/// ```
	pub fn resolve(&self, result: SubmitResult) -> Response {
		if result.has_errors() {
			let errors = result.errors().into_iter().cloned().collect();
			return Response::Redisplay { errors };
		}

		let mut responses = vec![];
		self.flatten_into(result, &mut responses);

		match responses.len() {
			0 => Response::Nothing,
			1 => responses.remove(0),
			_ => Response::Sequence { responses },
		}
	}

	fn flatten_into(&self, result: SubmitResult, out: &mut Vec<Response>) {
		match result {
			SubmitResult::ActionList(items) => {
				for item in items {
					self.flatten_into(item, out);
				}
			}
			SubmitResult::Script(action) => {
				if let Some(Response::Script { actions }) = out.last_mut() {
					actions.push(action);
				} else {
					out.push(Response::Script {
						actions: vec![action],
					});
				}
			}
			SubmitResult::Success(success) => out.push(Response::Notify {
				title: success.title,
				message: success.message,
				reset: self.reset_on_success,
			}),
			SubmitResult::View(view) => out.push(Response::Replace { view }),
			// Filtered out by `resolve` before flattening
			SubmitResult::Error(err) => out.push(Response::Redisplay { errors: vec![err] }),
		}
	}
}
