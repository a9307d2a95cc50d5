//! The demo forms, one tab per topic

use anyhow::Result;
use formward::forms::{ModelError, Tab};
use formward::prelude::*;
use formward::submit::JsAction;
use rand::Rng;

fn random_int() -> u32 {
	rand::thread_rng().gen_range(1..=100)
}

fn statuses() -> Choices {
	[(0, "noob"), (1, "pro"), (2, "dev")].into_iter().collect()
}

/// Build all five tabs with their forms and handlers
pub fn build() -> Result<Tabs<FormEndpoint>> {
	let mut tabs = Tabs::new();
	basic_use(tabs.add_tab("Basic Use"))?;
	handler_output(tabs.add_tab("Handler Output"))?;
	handler_safety(tabs.add_tab("Handler Safety"))?;
	complex_examples(tabs.add_tab("Complex Examples"))?;
	layout_control(tabs.add_tab("Layout Control"))?;
	Ok(tabs)
}

/// Find a form by name across all tabs
pub fn find<'a>(tabs: &'a mut Tabs<FormEndpoint>, name: &str) -> Option<&'a mut FormEndpoint> {
	tabs.iter_mut()
		.flat_map(|tab| tab.forms_mut())
		.find(|endpoint| endpoint.name() == name)
}

fn basic_use(tab: &mut Tab<FormEndpoint>) -> Result<()> {
	tab.header("Very simple form");

	let mut form = Form::new("subscribe");
	form.add_control("email", Control::line(), FieldOptions::new())?;
	form.set_button(Button::new("Subscribe").icon("mail"));
	tab.form(form.on_submit(|form, _| {
		let email = form.model().get_str("email")?.unwrap_or_default();
		Ok(SubmitResult::success(format!("Subscribed {} to newsletter.", email)))
	}));

	tab.header("But very flexible");

	let mut form = Form::new("statuses");
	{
		let mut group = form.add_group(GroupOptions::new().width(Width::THREE));
		group.add_control("name", Control::line(), FieldOptions::new())?;
		group.add_control("surname", Control::line(), FieldOptions::new())?;
		group.add_control(
			"gender",
			Control::dropdown([(0, "Female"), (1, "Male")].into_iter().collect()),
			FieldOptions::new(),
		)?;
	}

	form.add_control("description", Control::textarea(), FieldOptions::new())?;
	form.set_value("description", 0)?;
	form.add_control("no_description", Control::textarea(), FieldOptions::new())?;
	form.set_value("no_description", serde_json::Value::Null)?;
	form.add_control("status_optional", Control::dropdown(statuses()), FieldOptions::new())?;
	for (name, field_type, mandatory) in [
		("status_string_required", FieldType::String, false),
		("status_integer_required", FieldType::Integer, false),
		("status_string_mandatory", FieldType::String, true),
		("status_integer_mandatory", FieldType::Integer, true),
	] {
		let options = FieldOptions::typed(field_type).with_values(statuses());
		let options = if mandatory {
			options.mandatory()
		} else {
			options.required()
		};
		form.add_control(name, Control::dropdown(Choices::new()), options)?;
	}
	tab.form(form.on_submit(|form, _| {
		Ok(JsAction::toast(form.model().to_json().to_string()).into())
	}));

	tab.header("Comparing Field type vs Form control class");

	let mut form = Form::new("dates");
	form.add_field(Field::new("field", FieldType::Date).with_caption("Date using model field:"))?;
	form.add_control(
		"control",
		Control::calendar().caption("Date using form control: "),
		FieldOptions::typed(FieldType::Date),
	)?;
	form.set_button(Button::new("Compare Date"));
	tab.form(form.on_submit(|form, _| {
		let message = format!(
			"field = {}; control = {}",
			form.model().get_str("field")?.unwrap_or_default(),
			form.model().get_str("control")?.unwrap_or_default()
		);
		Ok(View::message("Date field vs control:")
			.paragraph(message)
			.into())
	}));

	Ok(())
}

/// One-field form with its own save button
fn single(name: &str, control: &str, button: &str) -> Result<Form, ModelError> {
	let mut form = Form::new(name);
	form.add_control(control, Control::line(), FieldOptions::new())?;
	form.set_button(Button::new(button));
	Ok(form)
}

fn handler_output(tab: &mut Tab<FormEndpoint>) -> Result<()> {
	tab.header("Form can respond with manually generated error");
	tab.form(single("error_output", "email1", "Save1")?.on_submit(|_, _| {
		Ok(SubmitResult::error(
			"email1",
			format!("some error action {}", random_int()),
		))
	}));

	tab.header("..or success message");
	tab.form(
		single("success_output", "email2", "Save2")?
			.on_submit(|_, _| Ok(SubmitResult::success("form was successful"))),
	);

	tab.header("Any other view can be output");
	tab.form(single("view_output", "email3", "Save3")?.on_submit(|_, _| {
		Ok(View::message("some header")
			.paragraph(format!("some text {}", random_int()))
			.into())
	}));

	tab.header("Modal can be output directly");
	tab.form(single("modal_output", "email4", "Save4")?.on_submit(|_, _| {
		let view = View::message("some header").paragraph(format!("some text {}", random_int()));
		Ok(View::modal("Something happen", view)
			.with_class("ui modal tiny")
			.into())
	}));

	tab.header("jsAction can be used too");
	tab.form(single("script_output", "email5", "Save5")?.on_submit(|_, _| {
		Ok(js_input("email5")
			.val(format!("random is {}", random_int()))
			.into())
	}));

	Ok(())
}

fn handler_safety(tab: &mut Tab<FormEndpoint>) -> Result<()> {
	tab.sized_header("Form handles errors", 2);
	tab.form(single("handler_panic", "email", "Save")?.on_submit(|form, _| {
		let fields: Vec<&Field> = form.model().fields().collect();
		// Index past the end on purpose: the handler panics
		Ok(SubmitResult::success(fields[fields.len()].name.clone()))
	}));

	tab.sized_header("Form shows handler errors", 2);
	tab.form(single("handler_error", "email", "Save")?.on_submit(|_, _| {
		Err(HandlerError::new("testing").with_info("arg1", "val1"))
	}));

	let mut form = single("handler_error_modal", "email", "Save")?;
	form.set_button(Button::new("Modal Test").secondary());
	tab.form(form.on_submit(|_, _| {
		Err(HandlerError::new("testing").with_info("arg1", "val1"))
	}));

	Ok(())
}

fn complex_examples(tab: &mut Tab<FormEndpoint>) -> Result<()> {
	tab.header("Conditional response");

	let model = FormModel::new().with_fields([
		Field::string("name"),
		Field::string("email"),
		Field::new("is_accept_terms", FieldType::Boolean).mandatory(),
	])?;
	let form = Form::with_model("register", model).segment();

	tab.form(form.on_submit(|form, _| {
		let name = form.model().get_str("name")?;
		if name.as_deref() != Some("John") {
			return Ok(SubmitResult::error(
				"name",
				format!(
					"Your name is not John! It is \"{}\". It should be John. Pleeease!",
					name.unwrap_or_default()
				),
			));
		}
		Ok(SubmitResult::ActionList(vec![
			js_input("email").val("john@gmail.com").into(),
			js_control("is_accept_terms")
				.checkbox("set checked")
				.into(),
		]))
	}));

	Ok(())
}

fn layout_control(tab: &mut Tab<FormEndpoint>) -> Result<()> {
	tab.header("Shows example of grouping and multiple errors");

	let mut form = Form::new("layout").segment();

	form.add_header("Example fields added one-by-one");
	form.add_control("name", Control::line(), FieldOptions::new())?;
	form.add_control("email", Control::line(), FieldOptions::new())?;

	form.add_header("Example of field grouping");
	{
		let mut group = form.add_group(GroupOptions::titled("Address with label"));
		group.add_control("address", Control::line().width(Width::TWELVE), FieldOptions::new())?;
		group.add_control(
			"code",
			Control::line().width(Width::FOUR),
			FieldOptions::new().with_caption("Post Code"),
		)?;
	}
	{
		let mut group = form.add_group(GroupOptions::new().width(Width::TWO));
		group.add_control("city", Control::line(), FieldOptions::new())?;
		group.add_control("country", Control::line(), FieldOptions::new())?;
	}
	{
		let mut group = form.add_group(GroupOptions::titled("Name").inline());
		group.add_control("first_name", Control::line().width(Width::EIGHT), FieldOptions::new())?;
		group.add_control(
			"middle_name",
			Control::line().width(Width::THREE).disabled(),
			FieldOptions::new(),
		)?;
		group.add_control("last_name", Control::line().width(Width::FIVE), FieldOptions::new())?;
	}

	tab.form(form.on_submit(|form, _| {
		let mut errors = vec![];
		for field in form.model().user_fields() {
			let value = form.model().get_str(&field.name)?;
			if value.as_deref() != Some("a") {
				errors.push(SubmitResult::error(
					field.name.clone(),
					format!(
						"Field {} should contain exactly \"a\", but contains {}",
						field.name,
						value.unwrap_or_default()
					),
				));
			}
		}

		if errors.is_empty() {
			return Ok(SuccessResult::new("No more errors")
				.with_message("so we have saved everything into the database")
				.into());
		}
		Ok(errors.into())
	}));

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_form_names_unique() {
		let tabs = build().unwrap();
		let mut names: Vec<&str> = tabs
			.iter()
			.flat_map(|tab| tab.forms())
			.map(|endpoint| endpoint.name())
			.collect();
		let total = names.len();
		names.sort();
		names.dedup();

		assert_eq!(names.len(), total);
		assert_eq!(total, 13);
		assert_eq!(tabs.len(), 5);
	}

	#[test]
	fn test_find() {
		let mut tabs = build().unwrap();
		assert!(find(&mut tabs, "register").is_some());
		assert!(find(&mut tabs, "nope").is_none());
	}
}
