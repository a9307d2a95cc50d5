//! # Formward
//!
//! Server-side form declaration, validation and submit handling.
//!
//! A form is declared as a set of controls over a model of typed fields. When
//! the form is submitted, the posted data is typecast and validated against
//! the declared fields, loaded into the model, and handed to a submit
//! handler. Whatever the handler returns is resolved into exactly one
//! response for the UI layer to render.
//!
//! ## Core Principles
//!
//! - **No silent failures**: validation errors, handler errors and handler
//!   panics all end up in front of the user, or fail the request under the
//!   fatal policy
//! - **Zero is a value**: `0`, `false` and explicit null are kept apart from
//!   "no value"
//! - **Request scoped**: every submission runs with its own
//!   [`RequestContext`](submit::RequestContext); settings are shared read-only
//!
//! ## Crates
//!
//! - [`forms`]: fields, controls, layout and binding of submitted data
//! - [`submit`]: handler dispatch and response resolution
//! - [`conf`]: layered settings
//!
//! ## Quick Example
//!
//! ```
//! use formward::prelude::*;
//!
//! let mut form = Form::new("register");
//! form.add_control("email", Control::line(), FieldOptions::new()).unwrap();
//! form.add_control("name", Control::line(), FieldOptions::new()).unwrap();
//! form.add_control("is_accept_terms", Control::checkbox(), FieldOptions::new().mandatory()).unwrap();
//!
//! let mut endpoint = form.on_submit(|form, _| {
//!     if form.model().get_str("name")?.as_deref() != Some("John") {
//!         return Ok(SubmitResult::error("name", "Your name is not John!"));
//!     }
//!     Ok(SubmitResult::ActionList(vec![
//!         js_input("email").val("john@gmail.com").into(),
//!         js_control("is_accept_terms").checkbox("set checked").into(),
//!     ]))
//! });
//!
//! let post = PostData::new().with("name", "John").with("is_accept_terms", "on");
//! let response = endpoint.submit(&RequestContext::default(), &post).unwrap();
//! assert!(matches!(response, Response::Script { ref actions } if actions.len() == 2));
//! ```

pub use formward_conf as conf;
pub use formward_forms as forms;
pub use formward_submit as submit;

/// Everything needed to declare a form and handle its submissions
pub mod prelude {
	pub use crate::conf::{HandlerErrorPolicy, Settings, SettingsBuilder};
	pub use crate::forms::{
		Button, Choices, Control, Field, FieldOptions, FieldType, Form, FormModel,
		GroupOptions, PostData, Tabs, Width,
	};
	pub use crate::submit::{
		ErrorResult, FormEndpoint, HandlerError, HandlerResult, OnSubmit, RequestContext,
		Response, SubmitResult, SuccessResult, View, js_control, js_input,
	};
}
