//! Cursor and character-class scanners
//!
//! A [Cursor] is an immutable view over one tokenized line plus a position in its token stream.
//! It is cheap to copy, and the text it hands out borrows the line, not the token buffer, so
//! extracted segments outlive the tokenization that produced them.

use crate::ini::lexing::tokens::Token;
use crate::ini::lexing::Span;

/// Position in the token stream of a single line
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, 's> {
    source: &'s str,
    tokens: &'t [(Token, Span)],
    pos: usize,
}

impl<'t, 's> Cursor<'t, 's> {
    pub fn new(source: &'s str, tokens: &'t [(Token, Span)]) -> Self {
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    /// The token under the cursor, `None` at the end of the line
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Move past the current token. No-op at the end of the line.
    pub fn bump(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Move to the end of the line
    pub fn skip_to_end(&mut self) {
        self.pos = self.tokens.len();
    }

    /// Byte offset of the current token, or the line length at the end
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.source.len())
    }

    /// Byte offset just past the current token, or the line length at the end
    pub fn token_end(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.end)
            .unwrap_or(self.source.len())
    }

    /// Text of the current token, empty at the end
    pub fn text(&self) -> &'s str {
        self.slice(self.offset()..self.token_end())
    }

    /// Text of the line for a byte range produced by this cursor
    pub fn slice(&self, span: Span) -> &'s str {
        &self.source[span]
    }

    /// The rest of the line from the cursor on
    #[cfg(test)]
    pub(crate) fn rest(&self) -> &'s str {
        &self.source[self.offset()..]
    }
}

/// Whitespace: space, CR, LF and TAB
pub mod spaces {
    use super::Cursor;
    use crate::ini::lexing::tokens::Token;

    pub fn is_space(c: char) -> bool {
        matches!(c, ' ' | '\r' | '\n' | '\t')
    }

    pub fn test(cursor: &Cursor<'_, '_>) -> bool {
        cursor.peek() == Some(Token::Whitespace)
    }

    /// Skip a maximal run of whitespace
    pub fn skip(cursor: &mut Cursor<'_, '_>) {
        // Whitespace tokens are maximal runs, one bump is enough
        if test(cursor) {
            cursor.bump();
        }
    }
}

/// Line comments: `#` or `;` to the end of the line
pub mod comment {
    use super::Cursor;
    use crate::ini::lexing::tokens::Token;

    pub fn test(cursor: &Cursor<'_, '_>) -> bool {
        cursor.peek() == Some(Token::CommentMarker)
    }

    /// On a comment marker, consume the rest of the line. Anywhere else, do nothing.
    pub fn skip(cursor: &mut Cursor<'_, '_>) {
        if test(cursor) {
            cursor.skip_to_end();
        }
    }
}
