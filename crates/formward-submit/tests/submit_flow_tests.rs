//! End-to-end submission tests
//!
//! Builds forms, registers handlers and checks the resolved responses.

use formward_conf::{HandlerErrorPolicy, Settings};
use formward_forms::{Control, FieldOptions, FieldType, Form, PostData};
use formward_submit::{
	ErrorResult, FormEndpoint, HandlerError, MSG_HANDLER_FAILED, OnSubmit, RequestContext,
	Response, SubmitError, SubmitResult, View, js_control, js_input,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// Fixtures
// =============================================================================

fn context(policy: HandlerErrorPolicy, expose: bool) -> RequestContext {
	let mut settings = Settings::default();
	settings.submit.handler_errors = policy;
	settings.submit.expose_error_details = expose;
	RequestContext::new(Arc::new(settings))
}

#[fixture]
fn ctx() -> RequestContext {
	RequestContext::default()
}

/// Registration form answering "John" with two client-side actions
#[fixture]
fn john_endpoint() -> FormEndpoint {
	let mut form = Form::new("register");
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("name", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control(
		"is_accept_terms",
		Control::checkbox(),
		FieldOptions::typed(FieldType::Boolean).mandatory(),
	)
	.unwrap();

	form.on_submit(|form, _| {
		if form.model().get_str("name")?.as_deref() != Some("John") {
			let name = form.model().get_str("name")?.unwrap_or_default();
			return Ok(SubmitResult::error(
				"name",
				format!("Your name is not John! It is \"{}\". It should be John. Pleeease!", name),
			));
		}
		Ok(SubmitResult::ActionList(vec![
			js_input("email").val("john@gmail.com").into(),
			js_control("is_accept_terms").checkbox("set checked").into(),
		]))
	})
}

fn accepting(name: &str) -> PostData {
	PostData::new()
		.with("name", name)
		.with("is_accept_terms", "on")
}

// =============================================================================
// Validation
// =============================================================================

/// **Category**: Error Path
/// **Verifies**: every empty mandatory field gets its own error, in field order
#[rstest]
fn test_each_empty_mandatory_field_reported(ctx: RequestContext) {
	let mut form = Form::new("layout");
	for name in ["first", "second", "third"] {
		form.add_control(name, Control::line(), FieldOptions::new().mandatory())
			.unwrap();
	}
	let mut endpoint = form.on_submit(|_, _| Ok(SubmitResult::success("unreachable")));

	let post = PostData::new().with("second", "filled").with("third", "   ");
	let response = endpoint.submit(&ctx, &post).unwrap();

	assert_eq!(
		response,
		Response::Redisplay {
			errors: vec![
				ErrorResult::field("first", "Must not be empty"),
				ErrorResult::field("third", "Must not be empty"),
			]
		}
	);
}

/// **Category**: Error Path
/// **Verifies**: the checkbox must be ticked before the handler runs
#[rstest]
fn test_mandatory_checkbox_blocks_handler(ctx: RequestContext, mut john_endpoint: FormEndpoint) {
	let post = PostData::new().with("name", "John");
	let result = john_endpoint.dispatch(&ctx, &post).unwrap();

	assert_eq!(result, SubmitResult::error("is_accept_terms", "Must not be empty"));
	assert_eq!(john_endpoint.form().model().get("name").unwrap(), None);
}

/// **Category**: Error Path
/// **Verifies**: a value outside an enum's keys is rejected
#[rstest]
fn test_enum_value_outside_keys(ctx: RequestContext) {
	let mut form = Form::new("enum");
	form.add_control(
		"status",
		Control::dropdown([("draft", "Draft"), ("published", "Published")].into_iter().collect()),
		FieldOptions::new(),
	)
	.unwrap();
	let mut endpoint = form.on_submit(|_, _| Ok(SubmitResult::nothing()));

	let response = endpoint
		.submit(&ctx, &PostData::new().with("status", "deleted"))
		.unwrap();

	assert_eq!(
		response,
		Response::Redisplay {
			errors: vec![ErrorResult::field(
				"status",
				"Value is not one of the allowed values"
			)]
		}
	);
}

// =============================================================================
// Handler results
// =============================================================================

/// **Category**: Happy Path
/// **Verifies**: any name but John is rejected inline on the name field
#[rstest]
fn test_not_john(ctx: RequestContext, mut john_endpoint: FormEndpoint) {
	let response = john_endpoint.submit(&ctx, &accepting("Jane")).unwrap();

	match response {
		Response::Redisplay { errors } => {
			assert_eq!(errors.len(), 1);
			assert_eq!(errors[0].field.as_deref(), Some("name"));
		}
		other => panic!("expected redisplay, got {:?}", other),
	}
}

/// **Category**: Happy Path
/// **Verifies**: John gets the email filled and the checkbox checked, in order
#[rstest]
fn test_john(ctx: RequestContext, mut john_endpoint: FormEndpoint) {
	let result = john_endpoint.dispatch(&ctx, &accepting("John")).unwrap();
	assert_eq!(
		result,
		SubmitResult::ActionList(vec![
			SubmitResult::Script(js_input("email").val("john@gmail.com")),
			SubmitResult::Script(js_control("is_accept_terms").checkbox("set checked")),
		])
	);

	let response = john_endpoint.submit(&ctx, &accepting("John")).unwrap();
	assert_eq!(
		serde_json::to_value(&response).unwrap(),
		json!({
			"response": "script",
			"actions": [
				{"action": "set_value", "control": "email", "value": "john@gmail.com"},
				{"action": "checkbox", "control": "is_accept_terms", "behavior": "set checked"}
			]
		})
	);
}

/// **Category**: Happy Path
/// **Verifies**: two errors in one action list both reach the user
#[rstest]
fn test_two_errors_in_action_list(ctx: RequestContext) {
	let mut form = Form::new("two_errors");
	form.add_control("email1", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("email2", Control::line(), FieldOptions::new())
		.unwrap();
	let mut endpoint = form.on_submit(|_, _| {
		Ok(vec![
			SubmitResult::error("email1", "some error action 1"),
			SubmitResult::error("email2", "some error action 2"),
		]
		.into())
	});

	let response = endpoint.submit(&ctx, &PostData::new()).unwrap();

	assert_eq!(
		response,
		Response::Redisplay {
			errors: vec![
				ErrorResult::field("email1", "some error action 1"),
				ErrorResult::field("email2", "some error action 2"),
			]
		}
	);
}

/// **Category**: Happy Path
/// **Verifies**: a returned view replaces the form output
#[rstest]
fn test_modal_view(ctx: RequestContext) {
	let mut form = Form::new("modal");
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();
	let mut endpoint = form.on_submit(|_, _| {
		let view = View::message("some header").paragraph("some text 42");
		Ok(View::modal("Something happen", view)
			.with_class("ui modal tiny")
			.into())
	});

	let response = endpoint.submit(&ctx, &PostData::new()).unwrap();
	assert!(matches!(response, Response::Replace { view: View::Modal { .. } }));
}

// =============================================================================
// Handler failures
// =============================================================================

fn failing_endpoint() -> FormEndpoint {
	let mut form = Form::new("failing");
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();
	form.on_submit(|_, _| Err(HandlerError::new("testing").with_info("arg1", "val1")))
}

fn panicking_endpoint() -> FormEndpoint {
	let mut form = Form::new("panicking");
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();
	form.on_submit(|_, _| panic!("testing"))
}

/// **Category**: Error Path
/// **Verifies**: a failing handler yields exactly one form-level error
#[rstest]
#[case(failing_endpoint(), false, MSG_HANDLER_FAILED)]
#[case(failing_endpoint(), true, "testing (arg1: val1)")]
#[case(panicking_endpoint(), false, MSG_HANDLER_FAILED)]
#[case(panicking_endpoint(), true, "testing (panic: true)")]
fn test_handler_failure_converted(
	#[case] mut endpoint: FormEndpoint,
	#[case] expose: bool,
	#[case] expected: &str,
) {
	let ctx = context(HandlerErrorPolicy::Convert, expose);
	let response = endpoint.submit(&ctx, &PostData::new()).unwrap();

	assert_eq!(
		response,
		Response::Redisplay {
			errors: vec![ErrorResult::form(expected)]
		}
	);
}

/// **Category**: Error Path
/// **Verifies**: the fatal policy hands the error back to the caller
#[rstest]
#[case(failing_endpoint(), "testing")]
#[case(panicking_endpoint(), "testing")]
fn test_handler_failure_fatal(#[case] mut endpoint: FormEndpoint, #[case] expected: &str) {
	let ctx = context(HandlerErrorPolicy::Fatal, false);
	let err = endpoint.submit(&ctx, &PostData::new()).unwrap_err();

	match err {
		SubmitError::Handler(inner) => assert_eq!(inner.message(), expected),
		other => panic!("unexpected {:?}", other),
	}
}

// =============================================================================
// Model values
// =============================================================================

/// **Category**: Edge Case
/// **Verifies**: zero and null initial values survive a submission that omits them
#[rstest]
fn test_zero_and_null_kept(ctx: RequestContext) {
	let mut form = Form::new("values");
	form.add_control("zero", Control::line(), FieldOptions::typed(FieldType::Integer))
		.unwrap();
	form.add_control("null", Control::line(), FieldOptions::new())
		.unwrap();
	form.set_value("zero", 0).unwrap();
	form.set_value("null", serde_json::Value::Null).unwrap();

	let mut endpoint =
		form.on_submit(|form, _| Ok(SubmitResult::success(form.model().to_json().to_string())));
	let response = endpoint.submit(&ctx, &PostData::new()).unwrap();

	match response {
		Response::Notify { title, .. } => {
			let snapshot: serde_json::Value = serde_json::from_str(&title).unwrap();
			assert_eq!(snapshot, json!({"zero": 0, "null": null}));
		}
		other => panic!("expected notify, got {:?}", other),
	}
}

/// **Category**: Edge Case
/// **Verifies**: a reused endpoint starts every submission from its declared values
#[rstest]
fn test_submissions_do_not_share_values(ctx: RequestContext) {
	let mut form = Form::new("contact");
	form.add_control("name", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("level", Control::line(), FieldOptions::typed(FieldType::Integer))
		.unwrap();
	form.set_value("level", 0).unwrap();

	let mut endpoint = form.on_submit(|form, _| {
		form.model_mut().set("level", 7)?;
		let email = form.model().get_str("email")?;
		Ok(SubmitResult::success(format!("email={:?}", email)))
	});

	let first = PostData::new().with("name", "a").with("email", "secret@x");
	let response = endpoint.submit(&ctx, &first).unwrap();
	assert!(matches!(response, Response::Notify { title, .. } if title == "email=Some(\"secret@x\")"));

	let second = PostData::new().with("name", "b");
	let response = endpoint.submit(&ctx, &second).unwrap();
	assert!(matches!(response, Response::Notify { title, .. } if title == "email=None"));

	let model = endpoint.form().model();
	assert_eq!(model.get("name").unwrap(), None);
	assert_eq!(model.get("level").unwrap(), Some(json!(0)));
}
