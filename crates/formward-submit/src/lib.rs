//! Submit handling for Formward forms
//!
//! A submission flows through three steps:
//!
//! 1. [`Dispatcher`] validates the posted data against the form, loads it
//!    into the model and runs the registered [`SubmitHandler`]
//! 2. The handler returns a [`SubmitResult`]: an error, a success, a view,
//!    a client-side script action, or an ordered list of those
//! 3. [`Resolver`] turns that result into exactly one [`Response`]
//!
//! Handler errors and panics never escape unhandled. Depending on
//! [`HandlerErrorPolicy`](formward_conf::HandlerErrorPolicy) they become a
//! form-level error or a [`SubmitError`].
//!
//! ## Example
//!
//! ```
//! use formward_forms::{Control, FieldOptions, Form, PostData};
//! use formward_submit::{OnSubmit, RequestContext, Response, SubmitResult};
//!
//! let mut form = Form::new("register");
//! form.add_control("name", Control::line(), FieldOptions::new()).unwrap();
//! form.add_control("is_accept_terms", Control::checkbox(), FieldOptions::new().mandatory()).unwrap();
//!
//! let mut endpoint = form.on_submit(|form, _| {
//!     if form.model().get_str("name")?.as_deref() != Some("John") {
//!         return Ok(SubmitResult::error("name", "Your name is not John!"));
//!     }
//!     Ok(SubmitResult::success("Welcome John"))
//! });
//!
//! let post = PostData::new().with("name", "Jane").with("is_accept_terms", "on");
//! let response = endpoint.submit(&RequestContext::default(), &post).unwrap();
//! assert!(matches!(response, Response::Redisplay { .. }));
//! ```

pub mod context;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod js;
pub mod resolve;
pub mod result;
pub mod view;

pub use context::RequestContext;
pub use dispatch::{Dispatcher, MSG_HANDLER_FAILED, SubmitHandler};
pub use endpoint::{FormEndpoint, OnSubmit};
pub use error::{HandlerError, HandlerResult, SubmitError};
pub use js::{JsAction, JsControl, JsInput, js_control, js_input};
pub use resolve::{Resolver, Response};
pub use result::{ErrorResult, SubmitResult, SuccessResult};
pub use view::View;
