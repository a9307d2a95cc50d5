//! Submitted form data

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw key/value pairs of one submission, as received from the client.
///
/// Values are not cast yet; see [`normalize`](crate::normalize).
///
/// # Examples
///
/// ```
/// use formward_forms::PostData;
/// use serde_json::json;
///
/// let post: PostData = [("name", "John"), ("email", "")].into_iter().collect();
/// assert_eq!(post.get("name"), Some(&json!("John")));
/// assert!(post.get("surname").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostData(IndexMap<String, Value>);

impl PostData {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.0.insert(key.into(), value.into());
		self
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Parse a `key=value` pair as typed on a command line
	///
	/// # Examples
	///
	/// ```
	/// use formward_forms::PostData;
	///
	/// assert_eq!(PostData::parse_pair("name=John"), Some(("name".to_string(), "John".to_string())));
	/// assert_eq!(PostData::parse_pair("empty="), Some(("empty".to_string(), String::new())));
	/// assert_eq!(PostData::parse_pair("novalue"), None);
	/// ```
	pub fn parse_pair(pair: &str) -> Option<(String, String)> {
		let (key, value) = pair.split_once('=')?;
		let key = key.trim();
		if key.is_empty() {
			return None;
		}
		Some((key.to_string(), value.to_string()))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PostData {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}
