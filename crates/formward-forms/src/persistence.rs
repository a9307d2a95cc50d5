//! Record stores backing a [`FormModel`](crate::FormModel)
//!
//! The model only needs get/set by field name, so any key-value store can sit
//! behind it. [`MemoryPersistence`] keeps one record in memory.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Debug;

/// Key-value record store keyed by field name
pub trait Persistence: Debug + Send {
	/// Stored value for `key`, or `None` when nothing was stored.
	///
	/// A stored `Value::Null` is returned as `Some(Value::Null)`.
	fn get(&self, key: &str) -> Option<Value>;

	fn set(&mut self, key: &str, value: Value);

	/// Remove the stored value, returning it
	fn unset(&mut self, key: &str) -> Option<Value>;

	fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}
}

/// In-memory single-record store
///
/// # Examples
///
/// ```
/// use formward_forms::{MemoryPersistence, Persistence};
/// use serde_json::{Value, json};
///
/// let mut store = MemoryPersistence::new();
/// store.set("description", json!(0));
/// store.set("no_description", Value::Null);
///
/// assert_eq!(store.get("description"), Some(json!(0)));
/// assert_eq!(store.get("no_description"), Some(Value::Null));
/// assert_eq!(store.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
	record: IndexMap<String, Value>,
}

impl MemoryPersistence {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.record.len()
	}

	pub fn is_empty(&self) -> bool {
		self.record.is_empty()
	}
}

impl Persistence for MemoryPersistence {
	fn get(&self, key: &str) -> Option<Value> {
		self.record.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: Value) {
		self.record.insert(key.to_string(), value);
	}

	fn unset(&mut self, key: &str) -> Option<Value> {
		self.record.shift_remove(key)
	}

	fn contains(&self, key: &str) -> bool {
		self.record.contains_key(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_memory_persistence_unset() {
		let mut store = MemoryPersistence::new();
		store.set("email", json!("a@b.c"));
		assert!(store.contains("email"));

		assert_eq!(store.unset("email"), Some(json!("a@b.c")));
		assert!(!store.contains("email"));
		assert!(store.is_empty());
	}

	#[test]
	fn test_memory_persistence_null_is_stored() {
		let mut store = MemoryPersistence::new();
		store.set("note", Value::Null);

		assert!(store.contains("note"));
		assert_eq!(store.len(), 1);
	}
}
