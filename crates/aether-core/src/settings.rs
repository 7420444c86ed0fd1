//! Process-wide builder settings.
//!
//! Settings are read from TOML:
//!
//! ```toml
//! [compose]
//! childless_policy = "reject"
//!
//! [render]
//! doctype = true
//! lang = "fr"
//! ```
//!
//! Missing tables and keys fall back to their defaults. Settings are
//! installed at most once per process with [`configure`]; until then
//! [`current`] returns the defaults.

use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use serde::Deserialize;

use crate::error::{AetherError, AetherResult};

/// Installed settings.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Returned by [`current`] until settings are installed.
static DEFAULT_SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::default);

/// What composition does with children handed to a void element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildlessPolicy {
	/// Ignore the children and record a warning.
	#[default]
	Warn,
	/// Fail the composition call.
	Reject,
}

/// Composition settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComposeSettings {
	/// Default policy for children handed to void elements.
	pub childless_policy: ChildlessPolicy,
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Whether `html` elements built without an explicit flag emit a doctype.
	pub doctype: bool,
	/// Default `lang` attribute of `html` elements.
	pub lang: String,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			doctype: false,
			lang: "en".to_string(),
		}
	}
}

/// Builder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// `[compose]` table.
	pub compose: ComposeSettings,
	/// `[render]` table.
	pub render: RenderSettings,
}

impl Settings {
	/// Parses settings from TOML text.
	///
	/// # Examples
	///
	/// ```
	/// use aether_core::{ChildlessPolicy, Settings};
	///
	/// let settings = Settings::from_toml_str("[compose]\nchildless_policy = \"reject\"\n").unwrap();
	/// assert_eq!(settings.compose.childless_policy, ChildlessPolicy::Reject);
	/// assert_eq!(settings.render.lang, "en");
	/// ```
	pub fn from_toml_str(text: &str) -> AetherResult<Self> {
		toml::from_str(text).map_err(|error| AetherError::Settings(error.to_string()))
	}

	/// Reads and parses a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> AetherResult<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading settings");
		let text = std::fs::read_to_string(path)?;
		Self::from_toml_str(&text)
	}
}

/// Installs the process-wide settings.
///
/// # Errors
///
/// Returns [`AetherError::Settings`] if settings were already installed.
pub fn configure(settings: Settings) -> AetherResult<()> {
	SETTINGS
		.set(settings)
		.map_err(|_| AetherError::Settings("settings are already configured".to_string()))?;
	tracing::debug!("settings configured");
	Ok(())
}

/// Returns the installed settings, or the defaults when none were installed.
pub fn current() -> &'static Settings {
	SETTINGS.get().unwrap_or(&*DEFAULT_SETTINGS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.compose.childless_policy, ChildlessPolicy::Warn);
		assert!(!settings.render.doctype);
		assert_eq!(settings.render.lang, "en");
	}

	#[rstest]
	fn test_empty_document_yields_defaults() {
		assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
	}

	#[rstest]
	fn test_partial_tables() {
		let settings = Settings::from_toml_str("[render]\ndoctype = true\n").unwrap();
		assert!(settings.render.doctype);
		assert_eq!(settings.render.lang, "en");
		assert_eq!(settings.compose.childless_policy, ChildlessPolicy::Warn);
	}

	#[rstest]
	#[case("[compose]\nchildless_policy = \"panic\"\n")]
	#[case("[render]\ndoctype = \"yes\"\n")]
	#[case("not toml")]
	fn test_invalid_documents(#[case] text: &str) {
		assert!(matches!(
			Settings::from_toml_str(text),
			Err(AetherError::Settings(_))
		));
	}

	#[rstest]
	fn test_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("aether.toml");
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "[render]\nlang = \"de\"").unwrap();

		let settings = Settings::from_file(&path).unwrap();
		assert_eq!(settings.render.lang, "de");
	}

	#[rstest]
	fn test_from_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = Settings::from_file(dir.path().join("missing.toml"));
		assert!(matches!(result, Err(AetherError::Io(_))));
	}
}
