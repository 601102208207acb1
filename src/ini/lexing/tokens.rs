//! Token definitions for the ini format
//!
//! The tokens are defined using the logos derive macro. Apart from whitespace and text, each
//! token is exactly one character that means something to at least one extractor.
use logos::Logos;

/// All possible tokens in a line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Space, CR, LF and TAB only. Other unicode whitespace is text.
    #[regex(r"[ \r\n\t]+")]
    Whitespace,

    #[token("#")]
    #[token(";")]
    CommentMarker,

    #[token("'")]
    SingleQuote,
    #[token("\"")]
    DoubleQuote,

    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    #[token(":")]
    Colon,
    #[token(".")]
    Period,
    #[token("=")]
    Equals,

    #[token("\\")]
    Backslash,

    // Everything else
    #[regex(r#"[^ \r\n\t#;'"\[\]:.=\\]+"#)]
    Text,
}

impl Token {
    /// Check if this token is a whitespace run
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Check if this token opens a string literal
    pub fn is_quote(&self) -> bool {
        matches!(self, Token::SingleQuote | Token::DoubleQuote)
    }

    /// Check if this token ends an identifier
    pub fn is_identifier_delimiter(&self) -> bool {
        matches!(self, Token::Colon | Token::Period | Token::Equals)
    }

    /// Check if this token ends a section segment
    pub fn is_section_delimiter(&self) -> bool {
        matches!(self, Token::Colon | Token::Period | Token::CloseBracket)
    }
}
