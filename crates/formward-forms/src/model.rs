//! The bound data model of a form

use crate::field::Field;
use crate::persistence::{MemoryPersistence, Persistence};
use indexmap::IndexMap;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
	#[error("Field '{0}' is already declared")]
	DuplicateField(String),
	#[error("Field '{0}' is not declared")]
	UnknownField(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Ordered collection of uniquely named fields plus the record holding their
/// values.
///
/// `get` resolves in this order: stored value, field default, absent.
/// Absent (`None`) stays distinct from an explicit null (`Some(Value::Null)`)
/// and from zero.
#[derive(Debug)]
pub struct FormModel {
	fields: IndexMap<String, Field>,
	store: Box<dyn Persistence>,
}

impl FormModel {
	/// Create an empty model backed by [`MemoryPersistence`]
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Field, FieldType, FormModel};
	/// use serde_json::json;
	///
	/// let mut model = FormModel::new();
	/// model.add_field(Field::new("description", FieldType::Text)).unwrap();
	///
	/// assert_eq!(model.get("description").unwrap(), None);
	/// model.set("description", 0).unwrap();
	/// assert_eq!(model.get("description").unwrap(), Some(json!(0)));
	/// ```
	pub fn new() -> Self {
		Self::with_persistence(Box::new(MemoryPersistence::new()))
	}

	pub fn with_persistence(store: Box<dyn Persistence>) -> Self {
		Self {
			fields: IndexMap::new(),
			store,
		}
	}

	/// Declare a field. Names are unique within a model.
	pub fn add_field(&mut self, field: Field) -> ModelResult<()> {
		if self.fields.contains_key(&field.name) {
			return Err(ModelError::DuplicateField(field.name));
		}
		self.fields.insert(field.name.clone(), field);
		Ok(())
	}

	/// Declare several fields in order
	pub fn with_fields<I>(mut self, fields: I) -> ModelResult<Self>
	where
		I: IntoIterator<Item = Field>,
	{
		for field in fields {
			self.add_field(field)?;
		}
		Ok(self)
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.get(name)
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub fn fields(&self) -> impl Iterator<Item = &Field> {
		self.fields.values()
	}

	/// Fields that are not flagged as system fields
	pub fn user_fields(&self) -> impl Iterator<Item = &Field> {
		self.fields.values().filter(|f| !f.system)
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	fn declared(&self, name: &str) -> ModelResult<&Field> {
		self.fields
			.get(name)
			.ok_or_else(|| ModelError::UnknownField(name.to_string()))
	}

	pub fn get(&self, name: &str) -> ModelResult<Option<Value>> {
		let field = self.declared(name)?;
		Ok(self.store.get(name).or_else(|| field.default.clone()))
	}

	/// String form of a value, for handlers that compare text.
	///
	/// Returns `None` for absent and null values.
	pub fn get_str(&self, name: &str) -> ModelResult<Option<String>> {
		Ok(match self.get(name)? {
			None | Some(Value::Null) => None,
			Some(Value::String(s)) => Some(s),
			Some(other) => Some(other.to_string()),
		})
	}

	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> ModelResult<()> {
		self.declared(name)?;
		self.store.set(name, value.into());
		Ok(())
	}

	/// Store a value for a field the caller already looked up
	pub(crate) fn store_value(&mut self, name: &str, value: Value) {
		self.store.set(name, value);
	}

	/// Drop the stored value so `get` falls back to the default again
	pub fn unset(&mut self, name: &str) -> ModelResult<Option<Value>> {
		self.declared(name)?;
		Ok(self.store.unset(name))
	}

	/// Whether a value was explicitly stored (defaults do not count)
	pub fn is_set(&self, name: &str) -> bool {
		self.store.contains(name)
	}

	/// Explicitly stored values, in field order. Defaults are left out.
	pub fn stored(&self) -> IndexMap<String, Value> {
		self.fields
			.keys()
			.filter_map(|name| self.store.get(name).map(|v| (name.clone(), v)))
			.collect()
	}

	/// Put the store back to what [`stored`](Self::stored) returned.
	///
	/// Fields missing from `stored` are unset, so they fall back to their
	/// defaults again.
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::{Field, FormModel};
	///
	/// let mut model = FormModel::new()
	///     .with_fields([Field::string("name"), Field::string("email")])
	///     .unwrap();
	/// model.set("name", "initial").unwrap();
	/// let declared = model.stored();
	///
	/// model.set("name", "a").unwrap();
	/// model.set("email", "secret@x").unwrap();
	/// model.restore(&declared);
	///
	/// assert_eq!(model.get_str("name").unwrap().as_deref(), Some("initial"));
	/// assert_eq!(model.get("email").unwrap(), None);
	/// ```
	pub fn restore(&mut self, stored: &IndexMap<String, Value>) {
		for name in self.fields.keys() {
			match stored.get(name) {
				Some(value) => self.store.set(name, value.clone()),
				None => {
					self.store.unset(name);
				}
			}
		}
	}

	/// Ordered snapshot of every field's resolved value
	pub fn values(&self) -> IndexMap<String, Option<Value>> {
		self.fields
			.values()
			.map(|f| {
				let value = self.store.get(&f.name).or_else(|| f.default.clone());
				(f.name.clone(), value)
			})
			.collect()
	}

	/// JSON object of all values; absent values are encoded as null
	pub fn to_json(&self) -> Value {
		Value::Object(
			self.values()
				.into_iter()
				.map(|(name, value)| (name, value.unwrap_or(Value::Null)))
				.collect(),
		)
	}
}

impl Default for FormModel {
	fn default() -> Self {
		Self::new()
	}
}
