//! Settings of the ini-tree command line tool
//!
//! The defaults ship inside the binary (`defaults/ini-tree.default.toml`). On top of them the
//! CLI layers `ini-tree.toml` from the working directory when present, then the file given with
//! `--config`, then flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/ini-tree.default.toml");

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
}

/// How loaded trees are printed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    pub format: String,
    pub indent: usize,
    pub show_values: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: "treeviz".to_string(),
            indent: 2,
            show_values: true,
        }
    }
}

/// Builds [Settings] from the embedded defaults plus whatever the caller layers on top.
///
/// Later layers win. Keys missing from a layer keep the value of the layer below.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        SettingsLoader {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn layer(self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        SettingsLoader {
            builder: self.builder.add_source(file),
        }
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `output.format`, above every file
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        let builder = self.builder.set_override(key, value)?;
        Ok(SettingsLoader { builder })
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        SettingsLoader::new()
    }
}

/// Settings with no user layers
pub fn load_defaults() -> Result<Settings, ConfigError> {
    SettingsLoader::new().build()
}
