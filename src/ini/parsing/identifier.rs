//! Identifier extraction
//!
//! The atomic unit of key paths. An identifier runs until `:`, `.`, `=` or the end of the line
//! and is right-trimmed. It is not left-trimmed: callers skip leading whitespace first.

use crate::ini::lexing::{Cursor, Span};

/// Consume one identifier and return its trimmed byte range.
///
/// The range is empty when the cursor sits on a delimiter (or at the end), which callers use as
/// the "no identifier here" signal.
pub fn identify(cursor: &mut Cursor<'_, '_>) -> Span {
    let start = cursor.offset();
    let mut end = start;

    while let Some(token) = cursor.peek() {
        if token.is_identifier_delimiter() {
            break;
        }
        if !token.is_whitespace() {
            end = cursor.token_end();
        }
        cursor.bump();
    }

    start..end
}
