//! Key path extraction
//!
//! A key path is a strictly dot-delimited list of identifiers, root first: `a . b.c` is
//! `["a", "b", "c"]`. It stops at the first empty identifier or at anything that isn't a `.`
//! after an identifier, so `:` and `=` both end it. The same grammar is used for the left hand
//! side of assignments and for lookup paths handed to the tree.

use crate::ini::lexing::{spaces, tokenize, Cursor, Token};
use crate::ini::parsing::identifier::identify;

/// Parse a dotted key path starting at the cursor
pub fn parse_key_path<'s>(cursor: &mut Cursor<'_, 's>) -> Vec<&'s str> {
    let mut segments = Vec::new();

    while !cursor.is_at_end() {
        spaces::skip(cursor);

        let span = identify(cursor);
        if span.is_empty() {
            break;
        }
        segments.push(cursor.slice(span));

        spaces::skip(cursor);
        if cursor.peek() != Some(Token::Period) {
            break;
        }
        cursor.bump();
    }

    segments
}

/// Parse a standalone lookup path such as `"server.http.port"`
pub fn parse_path(path: &str) -> Vec<&str> {
    let tokens = tokenize(path);
    let mut cursor = Cursor::new(path, &tokens);
    spaces::skip(&mut cursor);
    parse_key_path(&mut cursor)
}
