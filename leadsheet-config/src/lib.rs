//! Shared configuration loader for the leadsheet tools.
//!
//! `defaults/leadsheet.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`LeadsheetConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/leadsheet.default.toml");

/// Top-level configuration consumed by leadsheet applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadsheetConfig {
    pub render: RenderConfig,
    pub text: TextConfig,
    pub transpose: TransposeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Name of the output format, looked up in the format registry.
    pub format: String,
}

/// Knobs for the plain-text chord-over-lyrics layout.
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub show_titles: bool,
    pub hyphenate: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransposeConfig {
    pub target: String,
}

impl TransposeConfig {
    /// Configured default target; an empty string means "do not transpose".
    pub fn target(&self) -> Option<&str> {
        let target = self.target.trim();
        (!target.is_empty()).then_some(target)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LeadsheetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LeadsheetConfig, ConfigError> {
    Loader::new().build()
}
