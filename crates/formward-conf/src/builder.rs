//! Settings builder merging configuration sources

use crate::settings::Settings;
use crate::sources::{ConfigSource, EnvSource, SourceError, TomlFileSource, deep_merge};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error(transparent)]
	Source(#[from] SourceError),

	#[error("Invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),

	#[error("Invalid setting '{key}': {reason}")]
	Setting { key: &'static str, reason: &'static str },
}

/// Collects sources and merges them into [`Settings`]
///
/// # Examples
///
/// ```
/// use formward_conf::{HandlerErrorPolicy, SettingsBuilder};
/// use formward_conf::sources::EnvSource;
///
/// let settings = SettingsBuilder::new()
///     .add_source(EnvSource::from_vars([("FORMWARD_HANDLER_ERRORS", "fatal")]))
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.submit.handler_errors, HandlerErrorPolicy::Fatal);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Defaults, then the optional file at `path`, then `FORMWARD_*` variables
	pub fn standard(path: Option<&Path>) -> Self {
		let builder = Self::new();
		let builder = match path {
			Some(path) => builder.add_source(TomlFileSource::new(path).required()),
			None => builder,
		};
		builder.add_source(EnvSource::new())
	}

	pub fn build(mut self) -> Result<Settings, SettingsError> {
		// Stable sort keeps insertion order between equal priorities
		self.sources.sort_by_key(|s| s.priority());

		let mut merged = serde_json::to_value(Settings::default())?;
		for source in &self.sources {
			let loaded = source.load()?;
			tracing::debug!(
				source = %source.description(),
				sections = loaded.len(),
				"loaded settings source"
			);
			deep_merge(&mut merged, Value::Object(loaded.into_iter().collect()));
		}

		let settings: Settings = serde_json::from_value(merged)?;
		if settings.forms.date_formats.is_empty() {
			return Err(SettingsError::Setting {
				key: "forms.date_formats",
				reason: "at least one date format is needed",
			});
		}
		Ok(settings)
	}
}
