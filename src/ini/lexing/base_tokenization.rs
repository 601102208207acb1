//! Base tokenization implementation for the ini lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where a line becomes a token stream.

use crate::ini::lexing::tokens::Token;
use crate::ini::lexing::Span;
use logos::Logos;

/// Tokenize a line with location information
///
/// Returns tokens paired with their byte ranges in `source`. The ranges are contiguous and
/// cover the whole input, which is what lets extractors slice the line by token spans.
pub fn tokenize(source: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // The text pattern is the complement of every other token, so errors can't happen.
        // Keep the bytes anyway rather than leave a hole in the stream.
        let token = result.unwrap_or(Token::Text);
        tokens.push((token, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("key = value");
        assert_eq!(
            tokens,
            vec![
                (Token::Text, 0..3),
                (Token::Whitespace, 3..4),
                (Token::Equals, 4..5),
                (Token::Whitespace, 5..6),
                (Token::Text, 6..11),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_spans_cover_input() {
        let source = "[ a : b.c ] ; x = \"y\\n\"";
        let tokens = tokenize(source);

        let mut expected_start = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, expected_start);
            expected_start = span.end;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_multibyte_spans() {
        let tokens = tokenize("ключ=знач");
        assert_eq!(tokens[0], (Token::Text, 0..8));
        assert_eq!(tokens[1], (Token::Equals, 8..9));
        assert_eq!(tokens[2], (Token::Text, 9..17));
    }
}
