//! Named output formats
//!
//! A [Formatter] turns a whole tree into text. [FormatRegistry] maps format names to
//! formatters; the CLI looks formats up by the name given on the command line or in settings.

use crate::ini::settings::OutputSettings;
use crate::ini::tree::ConfigNode;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Renders a configuration tree as text
pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "treeviz"
    fn name(&self) -> &str;

    fn serialize(&self, node: &ConfigNode) -> Result<String, FormatError>;

    /// One line for `list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name, iterated in name order
pub struct FormatRegistry {
    by_name: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with nothing in it
    pub fn new() -> Self {
        FormatRegistry {
            by_name: BTreeMap::new(),
        }
    }

    /// Add `formatter` under its own name, replacing any previous one of that name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_owned();
        self.by_name.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.by_name.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Render `node` with the formatter registered as `format`
    pub fn serialize(&self, node: &ConfigNode, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(node),
            None => Err(FormatError::FormatNotFound(format.to_owned())),
        }
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// The built-in formats, configured from the `[output]` settings
    pub fn with_settings(output: &OutputSettings) -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter {
            show_values: output.show_values,
        });
        registry.register(super::JsonFormatter {
            indent: output.indent,
        });
        registry.register(super::YamlFormatter);
        registry
    }

    /// The built-in formats with default settings
    pub fn with_defaults() -> Self {
        Self::with_settings(&OutputSettings::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
