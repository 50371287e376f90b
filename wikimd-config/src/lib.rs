//! Shared configuration loader for the wikimd toolchain.
//!
//! `defaults/wikimd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikimdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wikimd_babel::ConversionRules;

const DEFAULT_TOML: &str = include_str!("../defaults/wikimd.default.toml");

/// Top-level configuration consumed by wikimd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WikimdConfig {
    pub convert: ConvertConfig,
}

/// Conversion output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub lists: ListsConfig,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListsConfig {
    pub unordered_marker: char,
    pub unordered_indent: String,
    pub ordered_indent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    pub fence: String,
}

impl From<&ConvertConfig> for ConversionRules {
    fn from(config: &ConvertConfig) -> Self {
        ConversionRules {
            unordered_marker: config.lists.unordered_marker,
            unordered_indent: config.lists.unordered_indent.clone(),
            ordered_indent: config.lists.ordered_indent.clone(),
            fence: config.code.fence.clone(),
        }
    }
}

impl From<ConvertConfig> for ConversionRules {
    fn from(config: ConvertConfig) -> Self {
        ConversionRules {
            unordered_marker: config.lists.unordered_marker,
            unordered_indent: config.lists.unordered_indent,
            ordered_indent: config.lists.ordered_indent,
            fence: config.code.fence,
        }
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
    pub fn build(self) -> Result<WikimdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults, as TOML text (a starting point for a user `wikimd.toml`).
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikimdConfig, ConfigError> {
    Loader::new().build()
}
