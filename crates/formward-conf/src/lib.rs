//! # Formward configuration
//!
//! Settings that change how submissions are handled, loaded in layers:
//! built-in defaults, an optional TOML file, then `FORMWARD_*` environment
//! variables.
//!
//! ```toml
//! [submit]
//! handler_errors = "convert"    # or "fatal"
//! expose_error_details = false
//! reset_on_success = false
//!
//! [forms]
//! trim_strings = true
//! date_formats = ["%Y-%m-%d", "%m/%d/%Y"]
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: the typed settings
//! - [`sources`]: configuration sources
//! - [`builder`]: merging sources into [`Settings`]

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::{DEFAULT_DATE_FORMATS, FormSettings, HandlerErrorPolicy, Settings, SubmitSettings};
