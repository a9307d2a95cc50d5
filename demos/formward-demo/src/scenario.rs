//! Scripted submissions against the demo forms

use crate::tabs;
use anyhow::{Context, Result, bail};
use formward::prelude::*;
use formward::submit::SubmitError;

/// What a step expects back
#[derive(Debug)]
enum Expect {
	/// Redisplay with errors on exactly these fields, in order
	FieldErrors(&'static [&'static str]),
	/// The handler failed: one form-level error, or a handler error under
	/// the fatal policy
	HandlerFailure,
	Notify,
	Replace,
	/// One script response with this many actions
	Script(usize),
}

struct Step {
	title: &'static str,
	form: &'static str,
	post: &'static [(&'static str, &'static str)],
	expect: Expect,
}

const STEPS: &[Step] = &[
	Step {
		title: "subscribe to the newsletter",
		form: "subscribe",
		post: &[("email", "john@gmail.com")],
		expect: Expect::Notify,
	},
	Step {
		title: "required and mandatory dropdowns left empty",
		form: "statuses",
		post: &[("status_string_required", ""), ("status_integer_mandatory", "")],
		expect: Expect::FieldErrors(&[
			"status_string_required",
			"status_integer_required",
			"status_string_mandatory",
			"status_integer_mandatory",
		]),
	},
	Step {
		title: "zero is a valid enum key",
		form: "statuses",
		post: &[
			("status_string_required", "0"),
			("status_integer_required", "0"),
			("status_string_mandatory", "0"),
			("status_integer_mandatory", "0"),
		],
		expect: Expect::Script(1),
	},
	Step {
		title: "dates through a field and through a calendar control",
		form: "dates",
		post: &[("field", "2024-03-01"), ("control", "Mar 01, 2024")],
		expect: Expect::Replace,
	},
	Step {
		title: "handler returns a field error",
		form: "error_output",
		post: &[],
		expect: Expect::FieldErrors(&["email1"]),
	},
	Step {
		title: "handler returns a modal",
		form: "modal_output",
		post: &[],
		expect: Expect::Replace,
	},
	Step {
		title: "handler returns a script action",
		form: "script_output",
		post: &[],
		expect: Expect::Script(1),
	},
	Step {
		title: "handler panics",
		form: "handler_panic",
		post: &[],
		expect: Expect::HandlerFailure,
	},
	Step {
		title: "handler returns an error with context",
		form: "handler_error",
		post: &[],
		expect: Expect::HandlerFailure,
	},
	Step {
		title: "terms not accepted",
		form: "register",
		post: &[("name", "John")],
		expect: Expect::FieldErrors(&["is_accept_terms"]),
	},
	Step {
		title: "name is not John",
		form: "register",
		post: &[("name", "Jane"), ("is_accept_terms", "on")],
		expect: Expect::FieldErrors(&["name"]),
	},
	Step {
		title: "name is John",
		form: "register",
		post: &[("name", "John"), ("is_accept_terms", "on")],
		expect: Expect::Script(2),
	},
	Step {
		title: "every field reported at once",
		form: "layout",
		post: &[("name", "a"), ("email", "b")],
		expect: Expect::FieldErrors(&[
			"email",
			"address",
			"code",
			"city",
			"country",
			"first_name",
			"middle_name",
			"last_name",
		]),
	},
	Step {
		title: "disabled control ignores its input",
		form: "layout",
		post: &[
			("name", "a"),
			("email", "a"),
			("address", "a"),
			("code", "a"),
			("city", "a"),
			("country", "a"),
			("first_name", "a"),
			("middle_name", "a"),
			("last_name", "a"),
		],
		expect: Expect::FieldErrors(&["middle_name"]),
	},
];

fn check(expect: &Expect, outcome: &Result<Response, SubmitError>) -> bool {
	match (expect, outcome) {
		(Expect::FieldErrors(fields), Ok(Response::Redisplay { errors })) => errors
			.iter()
			.map(|e| e.field.as_deref())
			.eq(fields.iter().map(|f| Some(*f))),
		(Expect::HandlerFailure, Ok(Response::Redisplay { errors })) => {
			errors.len() == 1 && errors[0].field.is_none()
		}
		(Expect::HandlerFailure, Err(SubmitError::Handler(_))) => true,
		(Expect::Notify, Ok(Response::Notify { .. })) => true,
		(Expect::Replace, Ok(Response::Replace { .. })) => true,
		(Expect::Script(n), Ok(Response::Script { actions })) => actions.len() == *n,
		_ => false,
	}
}

/// Run every step on a fresh set of forms, printing each response.
///
/// Fails on the first step whose response does not match.
pub fn replay(ctx: &RequestContext) -> Result<usize> {
	let mut tabs = tabs::build()?;

	for (i, step) in STEPS.iter().enumerate() {
		let endpoint = tabs::find(&mut tabs, step.form)
			.with_context(|| format!("no form named '{}'", step.form))?;
		let post: PostData = step.post.iter().copied().collect();

		tracing::info!(step = i + 1, form = step.form, "{}", step.title);
		let outcome = endpoint.submit(ctx, &post);

		match &outcome {
			Ok(response) => println!(
				"[{}] {}: {}",
				i + 1,
				step.title,
				serde_json::to_string(response)?
			),
			Err(err) => println!("[{}] {}: {}", i + 1, step.title, err),
		}

		if !check(&step.expect, &outcome) {
			bail!(
				"step {} ({}) expected {:?}, got {:?}",
				i + 1,
				step.title,
				step.expect,
				outcome
			);
		}
	}

	Ok(STEPS.len())
}

#[cfg(test)]
mod tests {
	use super::*;
	use formward::conf::{HandlerErrorPolicy, Settings};
	use rstest::rstest;
	use std::sync::Arc;

	#[rstest]
	#[case(HandlerErrorPolicy::Convert, false)]
	#[case(HandlerErrorPolicy::Convert, true)]
	#[case(HandlerErrorPolicy::Fatal, false)]
	fn test_replay_passes(#[case] policy: HandlerErrorPolicy, #[case] expose: bool) {
		let mut settings = Settings::default();
		settings.submit.handler_errors = policy;
		settings.submit.expose_error_details = expose;

		let steps = replay(&RequestContext::new(Arc::new(settings))).unwrap();
		assert_eq!(steps, STEPS.len());
	}
}
