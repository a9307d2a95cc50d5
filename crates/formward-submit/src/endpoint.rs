use crate::context::RequestContext;
use crate::dispatch::{Dispatcher, SubmitHandler};
use crate::error::{HandlerResult, SubmitError};
use crate::resolve::{Resolver, Response};
use crate::result::SubmitResult;
use formward_forms::{Form, PostData};
use std::fmt;

/// A form together with its registered submit handler
pub struct FormEndpoint {
	form: Form,
	handler: Box<dyn SubmitHandler>,
}

impl FormEndpoint {
	pub fn new(form: Form, handler: impl SubmitHandler + 'static) -> Self {
		Self {
			form,
			handler: Box::new(handler),
		}
	}

	pub fn name(&self) -> &str {
		self.form.name()
	}

	pub fn form(&self) -> &Form {
		&self.form
	}

	pub fn form_mut(&mut self) -> &mut Form {
		&mut self.form
	}

	/// Validate and run the handler, using the dispatch settings of `ctx`.
	///
	/// Every submission starts from the form's declared values: whatever
	/// the post or the handler stored is dropped once the result is known.
	pub fn dispatch(
		&mut self,
		ctx: &RequestContext,
		post: &PostData,
	) -> Result<SubmitResult, SubmitError> {
		let declared = self.form.model().stored();
		let outcome = Dispatcher::from_settings(ctx.settings()).dispatch(
			ctx,
			&mut self.form,
			post,
			self.handler.as_ref(),
		);
		self.form.model_mut().restore(&declared);
		outcome
	}

	/// Handle one submission end to end
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Control, FieldOptions, Form, PostData};
	/// use formward_submit::{OnSubmit, RequestContext, Response, SubmitResult};
	///
	/// let mut form = Form::new("subscribe");
	/// form.add_control("email", Control::line(), FieldOptions::new()).unwrap();
	///
	/// let mut endpoint = form.on_submit(|form, _| {
	///     let email = form.model().get_str("email")?.unwrap_or_default();
	///     Ok(SubmitResult::success(format!("Subscribed {}", email)))
	/// });
	///
	/// let post = PostData::new().with("email", "john@gmail.com");
	/// let response = endpoint.submit(&RequestContext::default(), &post).unwrap();
	///
	/// assert_eq!(response, Response::Notify {
	///     title: "Subscribed john@gmail.com".to_string(),
	///     message: None,
	///     reset: false,
	/// });
	/// ```
	pub fn submit(&mut self, ctx: &RequestContext, post: &PostData) -> Result<Response, SubmitError> {
		let result = self.dispatch(ctx, post)?;
		Ok(Resolver::from_settings(ctx.settings()).resolve(result))
	}
}

impl fmt::Debug for FormEndpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormEndpoint")
			.field("form", &self.form.name())
			.finish_non_exhaustive()
	}
}

/// Registers a submit handler on a form
pub trait OnSubmit {
	fn on_submit<F>(self, handler: F) -> FormEndpoint
	where
		F: Fn(&mut Form, &RequestContext) -> HandlerResult + Send + Sync + 'static;
}

impl OnSubmit for Form {
	fn on_submit<F>(self, handler: F) -> FormEndpoint
	where
		F: Fn(&mut Form, &RequestContext) -> HandlerResult + Send + Sync + 'static,
	{
		FormEndpoint::new(self, handler)
	}
}
