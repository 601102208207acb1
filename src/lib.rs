//! # ini-tree
//!
//! A loader for an extended INI format that builds a hierarchical tree of multi-valued
//! string leaves, with typed extraction on top.
//!
//! File Layout
//!
//! src/ini
//!   ├── lexing      logos tokenization of a single line, plus the cursor and scanners
//!   ├── parsing     extractors (identifier, key path, section, literal, value) and statements
//!   ├── tree        the ConfigNode store
//!   ├── convert     string to typed value conversion
//!   ├── loader      the document builder (IniLoader) and the dump helpers
//!   ├── formats     tree views for inspection (treeviz, json, yaml)
//!   └── settings    settings of the command line tool
//!
//! The format, in short:
//!
//! ```text
//! ; comment             # also a comment
//! [server]              ; section, nested sections with [a.b] or [child : parent]
//! host = localhost
//! port = 8080
//! port = 8081           ; repeated keys accumulate values
//! db.user = 'admin'     ; dotted keys descend from the current section
//! motd = "hi\tthere\n"  ; escapes only inside double quotes
//! ```

pub mod ini;

pub use ini::convert::FromValue;
pub use ini::error::LoadError;
pub use ini::loader::IniLoader;
pub use ini::tree::ConfigNode;
