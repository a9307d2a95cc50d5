//! Form building and binding tests
//!
//! Layout order, field creation through controls, and binding of submitted
//! data into the model.

use formward_forms::{
	Button, CastOptions, Control, ControlKind, Field, FieldOptions, FieldType, Form, FormModel,
	GroupOptions, LayoutItem, ModelError, PostData, Tabs, Width,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

// =============================================================================
// Fixtures
// =============================================================================

/// Form with headers and groups, mixing required and mandatory fields
#[fixture]
fn layout_form() -> Form {
	let mut form = Form::new("layout").segment();
	form.set_button(Button::new("Subscribe").icon("mail"));

	form.add_header("Example fields added one-by-one");
	form.add_control("name", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("email", Control::line(), FieldOptions::new())
		.unwrap();

	form.add_header("Example of field grouping");
	{
		let mut group = form.add_group(GroupOptions::titled("Postal Address"));
		group
			.add_control("address", Control::line().width(Width::TWELVE), FieldOptions::new())
			.unwrap();
		group
			.add_control(
				"zip",
				Control::line().width(Width::FOUR),
				FieldOptions::new().with_caption("Post Code").mandatory(),
			)
			.unwrap();
	}
	{
		let mut group = form.add_group(GroupOptions::new().inline());
		group
			.add_control(
				"birthday",
				Control::calendar(),
				FieldOptions::new().required(),
			)
			.unwrap();
	}
	form
}

// =============================================================================
// Layout
// =============================================================================

/// **Category**: Happy Path
/// **Verifies**: layout keeps declaration order across headers and groups
#[rstest]
fn test_layout_order(layout_form: Form) {
	let summary: Vec<String> = layout_form
		.layout()
		.iter()
		.map(|item| match item {
			LayoutItem::Header { title } => format!("header:{}", title),
			LayoutItem::Control { name } => format!("control:{}", name),
			LayoutItem::Group(group) => format!("group:{}", group.controls.join(",")),
		})
		.collect();

	assert_eq!(
		summary,
		vec![
			"header:Example fields added one-by-one",
			"control:name",
			"control:email",
			"header:Example of field grouping",
			"group:address,zip",
			"group:birthday",
		]
	);
	assert_eq!(layout_form.control_count(), 5);
	assert_eq!(layout_form.button().caption, "Subscribe");
}

/// **Category**: Happy Path
/// **Verifies**: controls imply field types for the fields they create
#[rstest]
fn test_implied_field_types(layout_form: Form) {
	let model = layout_form.model();
	assert_eq!(model.field("birthday").unwrap().field_type, FieldType::Date);
	assert_eq!(model.field("name").unwrap().field_type, FieldType::String);
	assert!(model.field("zip").unwrap().mandatory);
}

/// **Category**: Error Path
/// **Verifies**: a control name is never added twice
#[rstest]
fn test_duplicate_control(mut layout_form: Form) {
	let err = layout_form
		.add_control("email", Control::textarea(), FieldOptions::new())
		.unwrap_err();
	assert_eq!(err, ModelError::DuplicateField("email".to_string()));
}

/// **Category**: Happy Path
/// **Verifies**: the description carries captions and current values
#[rstest]
fn test_describe(mut layout_form: Form) {
	layout_form.set_value("zip", "12345").unwrap();
	let description = layout_form.describe();

	let zip = description
		.controls
		.iter()
		.find(|c| c.name == "zip")
		.unwrap();
	assert_eq!(zip.caption, "Post Code");
	assert_eq!(zip.value, Some(json!("12345")));
	assert!(description.segment);
}

// =============================================================================
// Model-backed forms
// =============================================================================

/// **Category**: Happy Path
/// **Verifies**: setting a model creates matching controls, skipping system fields
#[rstest]
fn test_form_from_model() {
	let model = FormModel::new()
		.with_fields([
			Field::new("id", FieldType::Integer).system(),
			Field::string("name").mandatory(),
			Field::new("notes", FieldType::Text),
			Field::new("joined", FieldType::Date),
			Field::string("level").with_values([("a", "Alpha"), ("b", "Beta")].into_iter().collect()),
		])
		.unwrap();

	let form = Form::with_model("member", model);

	assert!(form.control("id").is_none());
	assert_eq!(form.control("notes").unwrap().kind, ControlKind::Textarea);
	assert_eq!(form.control("joined").unwrap().kind, ControlKind::Calendar);
	assert!(matches!(
		&form.control("level").unwrap().kind,
		ControlKind::Dropdown { values } if values.len() == 2
	));
}

// =============================================================================
// Binding
// =============================================================================

/// **Category**: Edge Case
/// **Verifies**: zero and null are kept apart from absent
#[rstest]
fn test_zero_and_null_values() {
	let mut form = Form::new("values");
	form.add_control("zero", Control::line(), FieldOptions::typed(FieldType::Integer))
		.unwrap();
	form.add_control("nothing", Control::line(), FieldOptions::new())
		.unwrap();
	form.add_control("absent", Control::line(), FieldOptions::new())
		.unwrap();

	form.set_value("zero", 0).unwrap();
	form.set_value("nothing", Value::Null).unwrap();

	let model = form.model();
	assert_eq!(model.get("zero").unwrap(), Some(json!(0)));
	assert_eq!(model.get("nothing").unwrap(), Some(Value::Null));
	assert_eq!(model.get("absent").unwrap(), None);
}

/// **Category**: Edge Case
/// **Verifies**: disabled controls ignore submitted input
#[rstest]
fn test_disabled_control_ignores_input() {
	let mut form = Form::new("disabled");
	form.add_control("code", Control::line().disabled(), FieldOptions::new().mandatory())
		.unwrap();
	form.set_value("code", "kept").unwrap();

	form.load_post(&PostData::new().with("code", "changed"), &CastOptions::default())
		.unwrap();

	assert_eq!(form.model().get("code").unwrap(), Some(json!("kept")));
}

/// **Category**: Error Path
/// **Verifies**: nothing is written when any control fails
#[rstest]
fn test_all_or_nothing(mut layout_form: Form) {
	let post = PostData::new()
		.with("name", "John")
		.with("zip", "")
		.with("birthday", "not a date");

	let errors = layout_form
		.load_post(&post, &CastOptions::default())
		.unwrap_err();

	let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
	assert_eq!(fields, vec!["zip", "birthday"]);
	assert_eq!(layout_form.model().get("name").unwrap(), None);
}

/// **Category**: Happy Path
/// **Verifies**: dates are accepted in several formats and stored as ISO
#[rstest]
#[case("2024-03-01")]
#[case("03/01/2024")]
#[case("Mar 01, 2024")]
#[case("1 March 2024")]
fn test_date_formats(mut layout_form: Form, #[case] raw: &str) {
	let post = PostData::new().with("zip", "1000").with("birthday", raw);
	layout_form
		.load_post(&post, &CastOptions::default())
		.unwrap();

	assert_eq!(
		layout_form.model().get("birthday").unwrap(),
		Some(json!("2024-03-01"))
	);
}

// =============================================================================
// Tabs
// =============================================================================

/// **Category**: Happy Path
/// **Verifies**: tabs keep their order and their items
#[rstest]
fn test_tabs(layout_form: Form) {
	let mut tabs = Tabs::new();
	tabs.add_tab("Basic Use")
		.header("Very simple form")
		.form(layout_form);
	tabs.add_tab("Handler Output");

	assert_eq!(tabs.titles().collect::<Vec<_>>(), vec!["Basic Use", "Handler Output"]);
	assert_eq!(tabs.tab("Basic Use").unwrap().forms().count(), 1);
	assert_eq!(tabs.tab("Handler Output").unwrap().forms().count(), 0);
}
