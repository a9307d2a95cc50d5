//! Client-side actions a handler can ask for

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One client-side action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum JsAction {
	/// Set the value of a control's input
	SetValue { control: String, value: Value },
	/// Call a checkbox behavior, e.g. `"set checked"`
	Checkbox { control: String, behavior: String },
	/// Show a transient toast
	Toast { message: String },
}

/// Targets the input of one control
///
/// # Examples
///
/// ```
/// use formward_submit::{JsAction, js_input};
/// use serde_json::json;
///
/// assert_eq!(
///     js_input("email").val("john@gmail.com"),
///     JsAction::SetValue { control: "email".to_string(), value: json!("john@gmail.com") },
/// );
/// ```
pub fn js_input(control: impl Into<String>) -> JsInput {
	JsInput {
		control: control.into(),
	}
}

/// Targets the widget of one control
pub fn js_control(control: impl Into<String>) -> JsControl {
	JsControl {
		control: control.into(),
	}
}

#[derive(Debug, Clone)]
pub struct JsInput {
	control: String,
}

impl JsInput {
	pub fn val(self, value: impl Into<Value>) -> JsAction {
		JsAction::SetValue {
			control: self.control,
			value: value.into(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct JsControl {
	control: String,
}

impl JsControl {
	pub fn checkbox(self, behavior: impl Into<String>) -> JsAction {
		JsAction::Checkbox {
			control: self.control,
			behavior: behavior.into(),
		}
	}
}

impl JsAction {
	pub fn toast(message: impl Into<String>) -> Self {
		JsAction::Toast {
			message: message.into(),
		}
	}
}
