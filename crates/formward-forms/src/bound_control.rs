use crate::control::Control;
use crate::field::Field;
use serde_json::Value;

/// BoundControl represents a control together with its field and current value
pub struct BoundControl<'a> {
	form_name: &'a str,
	name: &'a str,
	control: &'a Control,
	field: &'a Field,
	value: Option<Value>,
}

impl<'a> BoundControl<'a> {
	/// Bind a control to its field and value
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{BoundControl, Control, Field};
	/// use serde_json::json;
	///
	/// let field = Field::string("email");
	/// let control = Control::line();
	///
	/// let bound = BoundControl::new("subscribe", "email", &control, &field, Some(json!("a@b.c")));
	/// assert_eq!(bound.name(), "email");
	/// assert_eq!(bound.value(), Some(&json!("a@b.c")));
	/// ```
	pub fn new(
		form_name: &'a str,
		name: &'a str,
		control: &'a Control,
		field: &'a Field,
		value: Option<Value>,
	) -> Self {
		Self {
			form_name,
			name,
			control,
			field,
			value,
		}
	}

	pub fn name(&self) -> &str {
		self.name
	}

	/// Get the HTML id attribute, scoped by form name
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{BoundControl, Control, Field};
	///
	/// let field = Field::string("email");
	/// let control = Control::line();
	/// let bound = BoundControl::new("subscribe", "email", &control, &field, None);
	///
	/// assert_eq!(bound.id_for_label(), "subscribe_email");
	/// ```
	pub fn id_for_label(&self) -> String {
		if self.form_name.is_empty() {
			self.name.to_string()
		} else {
			format!("{}_{}", self.form_name, self.name)
		}
	}

	/// Control caption, then field caption, then the readable field name
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{BoundControl, Control, Field};
	///
	/// let field = Field::string("code").with_caption("Post Code");
	/// let plain = Control::line();
	/// let labelled = Control::line().caption("ZIP");
	///
	/// assert_eq!(BoundControl::new("f", "code", &plain, &field, None).caption(), "Post Code");
	/// assert_eq!(BoundControl::new("f", "code", &labelled, &field, None).caption(), "ZIP");
	/// ```
	pub fn caption(&self) -> String {
		match &self.control.caption {
			Some(caption) => caption.clone(),
			None => self.field.caption(),
		}
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn control(&self) -> &Control {
		self.control
	}

	pub fn field(&self) -> &Field {
		self.field
	}

	/// Whether the control must be filled in (required or mandatory)
	pub fn is_required(&self) -> bool {
		self.field.required || self.field.mandatory
	}

	pub fn is_disabled(&self) -> bool {
		self.control.disabled || self.field.read_only
	}
}
