//! Parsing
//!
//! Extractors that turn a line's token stream into structured pieces, and the statement parser
//! that composes them. Everything here works on a single line and never fails: anything that
//! doesn't match the grammar is reported as [Statement::Malformed] and left to the caller to
//! ignore.
//!
//! Extractors, leaves first:
//!     - [identifier]: one trimmed identifier, up to `:`, `.` or `=`
//!     - [key_path]: dotted key paths (`a.b.c`)
//!     - [section]: section headers with the colon/dot nesting rule (`[a : b.c]`)
//!     - [string_literal]: quoted text, escapes only for double quotes
//!     - [value]: the right hand side of an assignment
//!     - [statement]: one line -> section, assignment, or nothing

pub mod identifier;
pub mod key_path;
pub mod section;
pub mod statement;
pub mod string_literal;
pub mod value;

pub use key_path::{parse_key_path, parse_path};
pub use section::parse_section;
pub use statement::{parse_statement, Assignment, Statement};
pub use string_literal::parse_string_literal;
pub use value::parse_value;
