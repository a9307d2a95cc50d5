//! Validating a submission and running its handler

use crate::context::RequestContext;
use crate::error::{HandlerError, HandlerResult, SubmitError};
use crate::result::{ErrorResult, SubmitResult};
use formward_conf::{HandlerErrorPolicy, Settings};
use formward_forms::{CastOptions, Form, PostData};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Message shown for a failed handler when details are hidden
pub const MSG_HANDLER_FAILED: &str = "Something went wrong while processing the form";

/// Code run once a submission has been validated and loaded into the form
pub trait SubmitHandler: Send + Sync {
	fn handle(&self, form: &mut Form, ctx: &RequestContext) -> HandlerResult;
}

impl<F> SubmitHandler for F
where
	F: Fn(&mut Form, &RequestContext) -> HandlerResult + Send + Sync,
{
	fn handle(&self, form: &mut Form, ctx: &RequestContext) -> HandlerResult {
		self(form, ctx)
	}
}

/// Turns a raw submission into a [`SubmitResult`].
///
/// The submitted data is validated first. Only a fully valid submission is
/// written into the model and handed to the handler. Handler errors and
/// panics are caught and handled according to the [`HandlerErrorPolicy`].
///
/// # Examples
///
/// ```
/// use formward_forms::{Control, FieldOptions, Form, PostData};
/// use formward_submit::{Dispatcher, HandlerResult, RequestContext, SubmitResult};
///
/// let mut form = Form::new("f");
/// form.add_control("name", Control::line(), FieldOptions::new().mandatory()).unwrap();
///
/// let handler = |_: &mut Form, _: &RequestContext| -> HandlerResult {
///     Ok(SubmitResult::success("saved"))
/// };
/// let result = Dispatcher::new()
///     .dispatch(&RequestContext::default(), &mut form, &PostData::new(), &handler)
///     .unwrap();
///
/// assert_eq!(result, SubmitResult::error("name", "Must not be empty"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
	policy: HandlerErrorPolicy,
	expose_error_details: bool,
	cast: CastOptions,
}

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			policy: settings.submit.handler_errors,
			expose_error_details: settings.submit.expose_error_details,
			cast: CastOptions::from(&settings.forms),
		}
	}

	pub fn with_policy(mut self, policy: HandlerErrorPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn with_error_details(mut self, expose: bool) -> Self {
		self.expose_error_details = expose;
		self
	}

	pub fn with_cast_options(mut self, cast: CastOptions) -> Self {
		self.cast = cast;
		self
	}

	pub fn dispatch(
		&self,
		ctx: &RequestContext,
		form: &mut Form,
		post: &PostData,
		handler: &dyn SubmitHandler,
	) -> Result<SubmitResult, SubmitError> {
		let span = tracing::info_span!(
			"dispatch",
			request_id = %ctx.request_id(),
			form = %form.name()
		);
		let _enter = span.enter();

		if let Err(errors) = form.load_post(post, &self.cast) {
			tracing::debug!(errors = errors.len(), "validation failed, handler skipped");
			return Ok(errors.into());
		}

		let outcome = catch_unwind(AssertUnwindSafe(|| handler.handle(form, ctx)))
			.unwrap_or_else(|payload| Err(HandlerError::from_panic(payload)));

		match outcome {
			Ok(result) => Ok(result),
			Err(err) => {
				tracing::error!(error = %err.detailed(), policy = %self.policy, "submit handler failed");
				match self.policy {
					HandlerErrorPolicy::Convert => Ok(self.convert(&err).into()),
					HandlerErrorPolicy::Fatal => Err(SubmitError::Handler(err)),
				}
			}
		}
	}

	fn convert(&self, err: &HandlerError) -> ErrorResult {
		if self.expose_error_details {
			ErrorResult::form(err.detailed())
		} else {
			ErrorResult::form(MSG_HANDLER_FAILED)
		}
	}
}
