//! Statements
//!
//! One physical line is one statement. After skipping leading whitespace:
//!
//!     - nothing left: [Statement::Empty]
//!     - `#` or `;`: [Statement::Comment]
//!     - `[`: [Statement::Section], nothing else is attempted
//!     - `key.path = value`: [Statement::Assignment]
//!     - `key.path` with no `=` after it: [Statement::Assignment] with an empty value, and
//!       whatever follows the key path is dropped
//!     - anything else, such as `= value` with no key: [Statement::Malformed]
//!
//! Malformed lines are not errors, the loader skips them.

use crate::ini::lexing::{comment, spaces, tokenize, Cursor, Token};
use crate::ini::parsing::key_path::parse_key_path;
use crate::ini::parsing::section::parse_section;
use crate::ini::parsing::value::parse_value;

/// A `key = value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'s> {
    /// Root first, relative to the current section. Never empty.
    pub key: Vec<&'s str>,
    pub value: String,
}

/// What a single line says
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'s> {
    Empty,
    Comment,
    /// Root first, relative to the tree root
    Section(Vec<&'s str>),
    Assignment(Assignment<'s>),
    Malformed,
}

/// Parse `key.path = value` at the cursor.
///
/// Returns `None` if there is no key. A key that isn't followed by `=` still assigns, with an
/// empty value.
pub fn parse_expression<'s>(cursor: &mut Cursor<'_, 's>) -> Option<Assignment<'s>> {
    let key = parse_key_path(cursor);
    if key.is_empty() {
        return None;
    }

    spaces::skip(cursor);
    if cursor.peek() != Some(Token::Equals) {
        cursor.skip_to_end();
        return Some(Assignment {
            key,
            value: String::new(),
        });
    }
    cursor.bump();
    spaces::skip(cursor);

    let value = parse_value(cursor);
    Some(Assignment { key, value })
}

/// Parse one physical line
pub fn parse_statement(line: &str) -> Statement<'_> {
    let tokens = tokenize(line);
    let mut cursor = Cursor::new(line, &tokens);

    spaces::skip(&mut cursor);
    if cursor.is_at_end() {
        return Statement::Empty;
    }
    if comment::test(&cursor) {
        return Statement::Comment;
    }
    if let Some(path) = parse_section(&mut cursor) {
        return Statement::Section(path);
    }
    match parse_expression(&mut cursor) {
        Some(assignment) => Statement::Assignment(assignment),
        None => Statement::Malformed,
    }
}
