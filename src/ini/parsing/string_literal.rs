//! String literals
//!
//! `'single quoted'` text is copied verbatim. `"double quoted"` text understands backslash
//! escapes. Either kind may be left unterminated, in which case it runs to the end of the line.

use crate::ini::lexing::{Cursor, Token};

/// Decode the character following a backslash.
///
/// Anything outside the table decodes to NUL.
pub const fn unescape(c: char) -> char {
    match c {
        '0' => '\0',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0c}',
        'r' => '\r',
        'n' => '\n',
        't' => '\t',
        'v' => '\u{0b}',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => '\0',
    }
}

/// Parse a string literal and return its decoded text.
///
/// Returns `None` when the cursor isn't on a quote. The closing quote, if present, is consumed.
pub fn parse_string_literal(cursor: &mut Cursor<'_, '_>) -> Option<String> {
    let quote = cursor.peek().filter(Token::is_quote)?;
    cursor.bump();

    let text = if quote == Token::DoubleQuote {
        read_escaped(cursor, quote)
    } else {
        read_verbatim(cursor, quote)
    };

    if cursor.peek() == Some(quote) {
        cursor.bump();
    }
    Some(text)
}

fn read_verbatim(cursor: &mut Cursor<'_, '_>, quote: Token) -> String {
    let start = cursor.offset();
    while cursor.peek().is_some_and(|token| token != quote) {
        cursor.bump();
    }
    cursor.slice(start..cursor.offset()).to_string()
}

fn read_escaped(cursor: &mut Cursor<'_, '_>, quote: Token) -> String {
    let mut text = String::new();

    while let Some(token) = cursor.peek() {
        if token == quote {
            break;
        }

        if token == Token::Backslash {
            cursor.bump();
            if cursor.is_at_end() {
                // A trailing backslash has nothing to escape
                text.push('\\');
                break;
            }
            // The escape takes the first character of the next token only
            let mut chars = cursor.text().chars();
            if let Some(c) = chars.next() {
                text.push(unescape(c));
            }
            text.push_str(chars.as_str());
            cursor.bump();
            continue;
        }

        text.push_str(cursor.text());
        cursor.bump();
    }

    text
}
