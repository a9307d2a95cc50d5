use crate::bound_control::BoundControl;
use crate::control::{Control, ControlKind};
use crate::field::{Field, FieldOptions, FieldType};
use crate::layout::{Button, Group, GroupOptions, LayoutItem};
use crate::model::{FormModel, ModelError, ModelResult};
use crate::post::PostData;
use crate::validation::{AggregateError, CastOptions, normalize};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A form: controls laid out over a [`FormModel`]
///
/// Controls are bound to model fields by name. Adding a control for a name the
/// model does not know creates the field; adding one for a known field reuses
/// the field's declaration.
#[derive(Debug)]
pub struct Form {
	name: String,
	model: FormModel,
	controls: IndexMap<String, Control>,
	layout: Vec<LayoutItem>,
	button: Button,
	segment: bool,
}

impl Form {
	/// Create an empty form with an in-memory model
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Control, FieldOptions, Form};
	///
	/// let mut form = Form::new("subscribe");
	/// form.add_control("email", Control::line(), FieldOptions::new()).unwrap();
	///
	/// assert_eq!(form.name(), "subscribe");
	/// assert!(form.model().has_field("email"));
	/// assert_eq!(form.control_count(), 1);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			model: FormModel::new(),
			controls: IndexMap::new(),
			layout: vec![],
			button: Button::default(),
			segment: false,
		}
	}

	/// Create a form with one control per user field of `model`
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{ControlKind, Field, FieldType, Form, FormModel};
	///
	/// let model = FormModel::new()
	///     .with_fields([
	///         Field::string("name"),
	///         Field::new("is_accept_terms", FieldType::Boolean).mandatory(),
	///     ])
	///     .unwrap();
	///
	/// let form = Form::with_model("register", model);
	/// assert_eq!(form.control("is_accept_terms").unwrap().kind, ControlKind::Checkbox);
	/// ```
	pub fn with_model(name: impl Into<String>, model: FormModel) -> Self {
		let mut form = Self::new(name);
		form.set_model(model);
		form
	}

	/// Replace the model, dropping controls and layout of the previous one
	pub fn set_model(&mut self, model: FormModel) {
		self.model = model;
		self.controls.clear();
		self.layout.clear();

		let controls: Vec<(String, Control)> = self
			.model
			.user_fields()
			.map(|f| (f.name.clone(), control_for(f)))
			.collect();

		for (name, control) in controls {
			self.controls.insert(name.clone(), control);
			self.layout.push(LayoutItem::Control { name });
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn model(&self) -> &FormModel {
		&self.model
	}

	pub fn model_mut(&mut self) -> &mut FormModel {
		&mut self.model
	}

	/// Render the form inside a segment
	pub fn segment(mut self) -> Self {
		self.segment = true;
		self
	}

	pub fn is_segment(&self) -> bool {
		self.segment
	}

	pub fn button(&self) -> &Button {
		&self.button
	}

	pub fn set_button(&mut self, button: Button) {
		self.button = button;
	}

	/// Add a control at the end of the layout
	pub fn add_control(
		&mut self,
		name: &str,
		control: Control,
		options: FieldOptions,
	) -> ModelResult<()> {
		self.register_control(name, control, options)?;
		self.layout.push(LayoutItem::Control {
			name: name.to_string(),
		});
		Ok(())
	}

	/// Declare a field and add the control its type calls for
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{ControlKind, Field, FieldType, Form};
	///
	/// let mut form = Form::new("dates");
	/// form.add_field(Field::new("field", FieldType::Date).with_caption("Date using model field:")).unwrap();
	///
	/// assert_eq!(form.control("field").unwrap().kind, ControlKind::Calendar);
	/// ```
	pub fn add_field(&mut self, field: Field) -> ModelResult<()> {
		if self.controls.contains_key(&field.name) {
			return Err(ModelError::DuplicateField(field.name));
		}
		let name = field.name.clone();
		let control = control_for(&field);
		self.model.add_field(field)?;
		self.controls.insert(name.clone(), control);
		self.layout.push(LayoutItem::Control { name });
		Ok(())
	}

	pub fn add_header(&mut self, title: impl Into<String>) {
		self.layout.push(LayoutItem::Header {
			title: title.into(),
		});
	}

	/// Start a group; controls added through the builder land in it
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Control, FieldOptions, Form, GroupOptions, LayoutItem, Width};
	///
	/// let mut form = Form::new("address");
	/// let mut group = form.add_group(GroupOptions::titled("Address with label"));
	/// group.add_control("address", Control::line().width(Width::TWELVE), FieldOptions::new()).unwrap();
	/// group.add_control("code", Control::line().width(Width::FOUR), FieldOptions::new().with_caption("Post Code")).unwrap();
	///
	/// match &form.layout()[0] {
	///     LayoutItem::Group(group) => assert_eq!(group.controls, vec!["address", "code"]),
	///     other => panic!("unexpected {:?}", other),
	/// }
	/// ```
	pub fn add_group(&mut self, options: GroupOptions) -> GroupBuilder<'_> {
		self.layout.push(LayoutItem::Group(Group {
			options,
			controls: vec![],
		}));
		let index = self.layout.len() - 1;
		GroupBuilder { form: self, index }
	}

	fn register_control(
		&mut self,
		name: &str,
		mut control: Control,
		options: FieldOptions,
	) -> ModelResult<()> {
		if self.controls.contains_key(name) {
			return Err(ModelError::DuplicateField(name.to_string()));
		}

		match self.model.field(name) {
			Some(field) => {
				// Existing fields keep their declaration; a bare dropdown
				// borrows the field's values.
				if let (ControlKind::Dropdown { values }, Some(field_values)) =
					(&mut control.kind, &field.values)
					&& values.is_empty()
				{
					*values = field_values.clone();
				}
			}
			None => {
				let implied = control.kind.implied_type();
				let mut options = options;
				if options.values.is_none() {
					options.values = control.choices().cloned();
				}
				if let ControlKind::Dropdown { values } = &mut control.kind
					&& values.is_empty()
					&& let Some(field_values) = &options.values
				{
					*values = field_values.clone();
				}
				self.model.add_field(options.into_field(name, implied))?;
			}
		}

		self.controls.insert(name.to_string(), control);
		Ok(())
	}

	pub fn control(&self, name: &str) -> Option<&Control> {
		self.controls.get(name)
	}

	pub fn controls(&self) -> impl Iterator<Item = (&str, &Control)> {
		self.controls.iter().map(|(name, c)| (name.as_str(), c))
	}

	pub fn control_count(&self) -> usize {
		self.controls.len()
	}

	pub fn layout(&self) -> &[LayoutItem] {
		&self.layout
	}

	/// Set a control's current value, e.g. an initial value before rendering
	pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> ModelResult<()> {
		self.model.set(name, value)
	}

	pub fn bound_control(&self, name: &str) -> Option<BoundControl<'_>> {
		let (name, control) = self.controls.get_key_value(name)?;
		let field = self.model.field(name)?;
		let value = self.model.get(name).ok().flatten();
		Some(BoundControl::new(&self.name, name, control, field, value))
	}

	/// Cast and validate a submission, then write it into the model.
	///
	/// Nothing is written unless every control validates. Disabled controls
	/// and read-only fields ignore their submitted value; submitted keys with
	/// no control are ignored. A key that is absent from the submission leaves
	/// the model value as it was.
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{CastOptions, Control, FieldOptions, FieldType, Form, PostData};
	/// use serde_json::json;
	///
	/// let mut form = Form::new("f");
	/// form.add_control("age", Control::line(), FieldOptions::typed(FieldType::Integer).required()).unwrap();
	///
	/// let bad = PostData::new().with("age", "old");
	/// let errors = form.load_post(&bad, &CastOptions::default()).unwrap_err();
	/// assert_eq!(errors.errors()[0].field, "age");
	///
	/// let good = PostData::new().with("age", "42");
	/// form.load_post(&good, &CastOptions::default()).unwrap();
	/// assert_eq!(form.model().get("age").unwrap(), Some(json!(42)));
	/// ```
	pub fn load_post(&mut self, post: &PostData, opts: &CastOptions) -> Result<(), AggregateError> {
		let mut errors = vec![];
		let mut staged: Vec<(String, Value)> = vec![];

		for (name, control) in &self.controls {
			let Some(field) = self.model.field(name) else {
				continue;
			};
			if control.disabled || field.read_only {
				continue;
			}
			match normalize(field, post.get(name), opts) {
				Ok(Some(value)) => staged.push((name.clone(), value)),
				Ok(None) => {}
				Err(e) => errors.push(e),
			}
		}

		if !errors.is_empty() {
			tracing::debug!(form = %self.name, errors = errors.len(), "submission failed validation");
			return Err(AggregateError(errors));
		}

		for (name, value) in staged {
			self.model.store_value(&name, value);
		}
		Ok(())
	}

	/// Serializable description of the form, for listing or client rendering
	pub fn describe(&self) -> FormDescription {
		let controls = self
			.controls
			.keys()
			.filter_map(|name| self.bound_control(name))
			.map(|bound| ControlDescription {
				name: bound.name().to_string(),
				caption: bound.caption(),
				field_type: bound.field().field_type,
				required: bound.field().required,
				mandatory: bound.field().mandatory,
				disabled: bound.is_disabled(),
				control: bound.control().clone(),
				value: bound.value().cloned(),
			})
			.collect();

		FormDescription {
			name: self.name.clone(),
			segment: self.segment,
			button: self.button.clone(),
			layout: self.layout.clone(),
			controls,
		}
	}
}

/// Default control for a model field
fn control_for(field: &Field) -> Control {
	if let Some(values) = &field.values {
		return Control::dropdown(values.clone());
	}
	match field.field_type {
		FieldType::Boolean => Control::checkbox(),
		FieldType::Date => Control::calendar(),
		FieldType::Text => Control::textarea(),
		FieldType::String | FieldType::Integer => Control::line(),
	}
}

/// Adds controls into one group of a form
pub struct GroupBuilder<'a> {
	form: &'a mut Form,
	index: usize,
}

impl GroupBuilder<'_> {
	pub fn add_control(
		&mut self,
		name: &str,
		control: Control,
		options: FieldOptions,
	) -> ModelResult<()> {
		self.form.register_control(name, control, options)?;
		if let Some(LayoutItem::Group(group)) = self.form.layout.get_mut(self.index) {
			group.controls.push(name.to_string());
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDescription {
	pub name: String,
	pub segment: bool,
	pub button: Button,
	pub layout: Vec<LayoutItem>,
	pub controls: Vec<ControlDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDescription {
	pub name: String,
	pub caption: String,
	pub field_type: FieldType,
	pub required: bool,
	pub mandatory: bool,
	pub disabled: bool,
	pub control: Control,
	pub value: Option<Value>,
}
