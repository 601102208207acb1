//! Lexer
//!
//! Every physical line is tokenized on its own through the logos lexer. The grammar is line
//! oriented: no construct spans more than one line, so there is no state carried from one line
//! to the next at this level.
//!
//! The token stream covers every byte of the line. Whitespace and text are maximal runs, every
//! other token is a single special character. Parsers never look at characters directly, they
//! walk the token stream through a [Cursor] and slice the line by token spans when they need the
//! text.
//!
//! Layers:
//!     - [tokens]: the logos token definitions
//!     - [base_tokenization]: line -> `Vec<(Token, Span)>`
//!     - [scanners]: the [Cursor] over a token stream and the `spaces` / `comment` scanners

pub mod base_tokenization;
pub mod scanners;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use scanners::{comment, spaces, Cursor};
pub use tokens::Token;

/// Byte range of a token inside its line
pub type Span = logos::Span;
