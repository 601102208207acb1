//! Section header extraction
//!
//! Section headers accept both `:` and `.` as separators, and they nest in opposite
//! directions:
//!
//!     - A segment introduced by `.` is a child of the segments collected so far. It is
//!       appended at the back of the path.
//!     - A segment introduced by `:` is a parent of the segments collected so far. It is
//!       prepended at the front of the path.
//!     - The first segment is placed as if introduced by `:`.
//!
//! So `[A:B]` reads "A, whose parent is B" and lands on `B -> A`, while `[A:B.C]` lands on
//! `B -> A -> C`. A header made only of dots is a plain path: `[C.B.A]` is `C -> B -> A`, the
//! same nodes as the key `C.B.A`.
//!
//! The closing bracket is optional, and anything after it is ignored.

use crate::ini::lexing::{spaces, Cursor, Token};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prepend,
    Append,
}

/// Parse a section header. Returns `None` when the cursor isn't on `[`.
///
/// The returned path is root first, ready to be resolved against the tree root. Empty segments
/// are dropped, so `[]` is the empty path (the root itself).
pub fn parse_section<'s>(cursor: &mut Cursor<'_, 's>) -> Option<Vec<&'s str>> {
    if cursor.peek() != Some(Token::OpenBracket) {
        return None;
    }
    cursor.bump();

    let mut segments = VecDeque::new();
    let mut direction = Direction::Prepend;

    while !cursor.is_at_end() {
        spaces::skip(cursor);

        let start = cursor.offset();
        let mut end = start;
        while let Some(token) = cursor.peek() {
            if token.is_section_delimiter() {
                break;
            }
            if !token.is_whitespace() {
                end = cursor.token_end();
            }
            cursor.bump();
        }

        if start < end {
            let segment = cursor.slice(start..end);
            match direction {
                Direction::Prepend => segments.push_front(segment),
                Direction::Append => segments.push_back(segment),
            }
        }

        match cursor.peek() {
            None => break,
            Some(Token::CloseBracket) => {
                cursor.bump();
                break;
            }
            Some(Token::Colon) => direction = Direction::Prepend,
            Some(Token::Period) => direction = Direction::Append,
            Some(_) => {}
        }
        cursor.bump();
    }

    Some(Vec::from(segments))
}
