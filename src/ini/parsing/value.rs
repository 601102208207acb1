//! Value assembly
//!
//! A value is everything after `=` up to the end of the line or the first comment marker that
//! isn't inside quotes. Quoted runs are decoded and concatenated with the raw text around them:
//! `a'b'"c\n"` is `abc` plus a newline.
//!
//! Leading whitespace is skipped and trailing raw whitespace is trimmed. Whitespace produced by
//! a literal is kept, so quoting is the way to keep blanks at either end of a value.

use crate::ini::lexing::{comment, spaces, Cursor, Token};
use crate::ini::parsing::string_literal::parse_string_literal;

/// Assemble the value starting at the cursor. Consumes the rest of the line.
pub fn parse_value(cursor: &mut Cursor<'_, '_>) -> String {
    spaces::skip(cursor);

    let mut value = String::new();
    // Everything before this offset came from a literal and is never trimmed
    let mut protected = 0;

    while let Some(token) = cursor.peek() {
        match token {
            Token::SingleQuote | Token::DoubleQuote => {
                if let Some(text) = parse_string_literal(cursor) {
                    value.push_str(&text);
                }
                protected = value.len();
            }
            Token::CommentMarker => {
                comment::skip(cursor);
                break;
            }
            _ => {
                value.push_str(cursor.text());
                cursor.bump();
            }
        }
    }

    let kept = protected + value[protected..].trim_end_matches(spaces::is_space).len();
    value.truncate(kept);
    value
}
