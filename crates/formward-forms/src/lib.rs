//! Form declaration and binding for Formward
//!
//! This crate covers everything up to the point where a submission is handed
//! to a submit handler:
//! - Field declarations with declared types, required/mandatory flags and defaults
//! - Controls, groups, headers and tabs describing the form layout
//! - A [`FormModel`] keeping field values in a pluggable [`Persistence`] store
//! - Typecasting and validation of submitted data
//!
//! ## Example
//!
//! ```
//! use formward_forms::{CastOptions, Control, FieldOptions, FieldType, Form, PostData};
//! use serde_json::json;
//!
//! let mut form = Form::new("register");
//! form.add_control("name", Control::line(), FieldOptions::new()).unwrap();
//! form.add_control("is_accept_terms", Control::checkbox(), FieldOptions::new().mandatory()).unwrap();
//!
//! let post = PostData::new().with("name", "John");
//! let errors = form.load_post(&post, &CastOptions::default()).unwrap_err();
//! assert_eq!(errors.errors()[0].field, "is_accept_terms");
//!
//! let post = post.with("is_accept_terms", "on");
//! form.load_post(&post, &CastOptions::default()).unwrap();
//! assert_eq!(form.model().get("is_accept_terms").unwrap(), Some(json!(true)));
//! ```

pub mod bound_control;
pub mod control;
pub mod field;
pub mod form;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod post;
pub mod tabs;
pub mod validation;

pub use bound_control::BoundControl;
pub use control::{Control, ControlKind, Width};
pub use field::{Choices, Field, FieldOptions, FieldType};
pub use form::{ControlDescription, Form, FormDescription, GroupBuilder};
pub use layout::{Button, Group, GroupOptions, LayoutItem};
pub use model::{FormModel, ModelError, ModelResult};
pub use persistence::{MemoryPersistence, Persistence};
pub use post::PostData;
pub use tabs::{Tab, TabItem, Tabs};
pub use validation::{
	AggregateError, CastOptions, MSG_MANDATORY, MSG_REQUIRED, ValidationError, normalize,
};
