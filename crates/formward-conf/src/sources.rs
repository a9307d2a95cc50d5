//! Configuration sources for layered settings
//!
//! Sources are merged in priority order (environment variables > config
//! file > defaults). Each source yields top-level sections (`submit`,
//! `forms`) as JSON objects, which are deep-merged before deserializing.

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Environment variable {key}: {message}")]
	Env { key: String, message: String },

	#[error("Parse error: {0}")]
	Parse(String),
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a TOML source; a missing file yields no values
	///
	/// # Examples
	///
	/// ```
	/// use formward_conf::sources::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("does-not-exist.toml");
	/// assert!(source.load().unwrap().is_empty());
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fail when the file does not exist
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() && !self.required {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
			path: self.path.clone(),
			source,
		})?;
		let toml_value: toml::Value = toml::from_str(&content)?;

		// Convert TOML value to JSON value
		let json_value = serde_json::to_value(&toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// How an environment variable maps into the settings tree
enum EnvKind {
	Bool,
	Str,
	List,
}

/// Variable suffix (after the prefix), section, key, kind
const ENV_KEYS: &[(&str, &str, &str, EnvKind)] = &[
	("HANDLER_ERRORS", "submit", "handler_errors", EnvKind::Str),
	(
		"EXPOSE_ERROR_DETAILS",
		"submit",
		"expose_error_details",
		EnvKind::Bool,
	),
	("RESET_ON_SUCCESS", "submit", "reset_on_success", EnvKind::Bool),
	("TRIM_STRINGS", "forms", "trim_strings", EnvKind::Bool),
	("DATE_FORMATS", "forms", "date_formats", EnvKind::List),
];

pub const DEFAULT_ENV_PREFIX: &str = "FORMWARD_";

/// Environment variable configuration source
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Read `FORMWARD_*` variables from the process environment
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Read from the given pairs instead of the process environment
	///
	/// # Examples
	///
	/// ```
	/// use formward_conf::sources::{ConfigSource, EnvSource};
	/// use serde_json::json;
	///
	/// let source = EnvSource::from_vars([("FORMWARD_RESET_ON_SUCCESS", "yes")]);
	/// let loaded = source.load().unwrap();
	/// assert_eq!(loaded["submit"], json!({"reset_on_success": true}));
	/// ```
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn lookup(&self, key: &str) -> Option<String> {
		match &self.vars {
			Some(vars) => vars
				.iter()
				.rev()
				.find(|(k, _)| k == key)
				.map(|(_, v)| v.clone()),
			None => std::env::var(key).ok(),
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config: IndexMap<String, Value> = IndexMap::new();

		for (suffix, section, key, kind) in ENV_KEYS {
			let full_key = format!("{}{}", self.prefix, suffix);
			let Some(raw) = self.lookup(&full_key) else {
				continue;
			};

			let value = match kind {
				EnvKind::Bool => Value::Bool(parse_bool(&raw).ok_or_else(|| SourceError::Env {
					key: full_key.clone(),
					message: format!("'{}' is not a boolean", raw),
				})?),
				EnvKind::Str => Value::String(raw.trim().to_string()),
				EnvKind::List => Value::Array(
					raw.split(',')
						.map(str::trim)
						.filter(|s| !s.is_empty())
						.map(|s| Value::String(s.to_string()))
						.collect(),
				),
			};

			let entry = config
				.entry(section.to_string())
				.or_insert_with(|| Value::Object(serde_json::Map::new()));
			if let Value::Object(map) = entry {
				map.insert(key.to_string(), value);
			}
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// Parse the usual spellings of a boolean
///
/// # Examples
///
/// ```
/// use formward_conf::sources::parse_bool;
///
/// assert_eq!(parse_bool("on"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

/// Merge `overlay` into `base`, recursing into objects
pub(crate) fn deep_merge(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(existing) => deep_merge(existing, value),
					None => {
						base_map.insert(key, value);
					}
				}
			}
		}
		(base, overlay) => *base = overlay,
	}
}
