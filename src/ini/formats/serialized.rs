//! JSON and YAML views of a tree, through serde
//!
//! A node serializes as `{"values": [...], "children": {...}}`, with either field left out when
//! empty. An empty tree is `{}`.

use crate::ini::formats::registry::{FormatError, Formatter};
use crate::ini::tree::ConfigNode;
use serde::Serialize;

/// Pretty-printed JSON with a configurable indent width
pub struct JsonFormatter {
    pub indent: usize,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        JsonFormatter { indent: 2 }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, node: &ConfigNode) -> Result<String, FormatError> {
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut output = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
        node.serialize(&mut serializer)
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        String::from_utf8(output).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &ConfigNode) -> Result<String, FormatError> {
        serde_yaml::to_string(node).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::loader::IniLoader;

    fn tree(source: &str) -> ConfigNode {
        let mut loader = IniLoader::new();
        loader.load_str(source, false);
        loader.root().clone()
    }

    #[test]
    fn test_json_shape() {
        let root = tree("[s]\nk = 1\nk = 2\n");
        let json = JsonFormatter::default()
            .serialize(&root)
            .expect("json output");

        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(
            parsed,
            serde_json::json!({
                "children": {
                    "s": {
                        "children": {
                            "k": { "values": ["1", "2"] }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_json_indent() {
        let root = tree("k = v\n");
        let json = JsonFormatter { indent: 4 }
            .serialize(&root)
            .expect("json output");
        assert!(json.contains("\n    \"children\""));
    }

    #[test]
    fn test_empty_json() {
        let json = JsonFormatter::default()
            .serialize(&ConfigNode::new())
            .expect("json output");
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_yaml() {
        let root = tree("a.b = x\n");
        let yaml = YamlFormatter.serialize(&root).expect("yaml output");

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("valid yaml");
        assert_eq!(
            parsed["children"]["a"]["children"]["b"]["values"][0].as_str(),
            Some("x")
        );
    }
}
