//! Output formats for loaded trees
//!
//! These are views for inspecting what a document loaded into, not INI writers: none of them
//! produces text that loads back into the same tree.
//!
//!     - treeviz: one line per node, with box-drawing connectors
//!     - json / yaml: the serde serialization of [ConfigNode](crate::ini::tree::ConfigNode)

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
