//! Handler errors and submission failures

use crate::result::SubmitResult;
use formward_forms::ModelError;
use std::any::Any;
use std::fmt;

/// Error raised by a submit handler.
///
/// Carries a message plus ordered key/value context, shown to the user only
/// when error details are exposed.
///
/// # Examples
///
/// ```
/// use formward_submit::HandlerError;
///
/// let err = HandlerError::new("testing").with_info("arg1", "val1");
/// assert_eq!(err.message(), "testing");
/// assert_eq!(err.detailed(), "testing (arg1: val1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
	message: String,
	info: Vec<(String, String)>,
}

impl HandlerError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			info: vec![],
		}
	}

	/// Attach one more piece of context
	pub fn with_info(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
		self.info.push((key.into(), value.to_string()));
		self
	}

	/// Build an error from a caught panic payload
	pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
		let message = if let Some(s) = payload.downcast_ref::<&str>() {
			(*s).to_string()
		} else if let Some(s) = payload.downcast_ref::<String>() {
			s.clone()
		} else {
			"handler panicked".to_string()
		};
		Self::new(message).with_info("panic", true)
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn info(&self) -> &[(String, String)] {
		&self.info
	}

	/// Message followed by its context, if any
	pub fn detailed(&self) -> String {
		if self.info.is_empty() {
			return self.message.clone();
		}
		let info = self
			.info
			.iter()
			.map(|(k, v)| format!("{}: {}", k, v))
			.collect::<Vec<_>>()
			.join(", ");
		format!("{} ({})", self.message, info)
	}
}

impl fmt::Display for HandlerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for HandlerError {}

impl From<ModelError> for HandlerError {
	fn from(err: ModelError) -> Self {
		HandlerError::new(err.to_string())
	}
}

impl From<serde_json::Error> for HandlerError {
	fn from(err: serde_json::Error) -> Self {
		HandlerError::new(err.to_string())
	}
}

/// What a submit handler returns
pub type HandlerResult = Result<SubmitResult, HandlerError>;

/// Failure of a whole submission that could not be turned into a result
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	/// Handler failure under the fatal policy
	#[error("Submit handler failed: {}", .0.detailed())]
	Handler(HandlerError),
}
