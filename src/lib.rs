//! # Introduction
//!
//! minicpp recognizes a simplified C++ subset: it scans source text into a
//! classified token stream and checks the stream against a fixed grammar
//! with a recursive descent parser, reporting acceptance or the first error.
//!
//! ## Recognition pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → accepted / error
//! ```
//!
//! 1. [`parser::lexer`] — tokenizes the source (maximal munch, one pass).
//! 2. [`parser::parse`] — recursive descent over the token stream; one
//!    routine per grammar non-terminal, no syntax tree, no error recovery.
//!
//! Both stages are pure functions of the source text; the first lexical or
//! syntax error aborts the run and carries the offending token or character
//! together with its position.

pub mod parser;

pub use parser::lexer::{LexError, Lexer};
pub use parser::parse::{ParseError, Parser, RecognizeError};
pub use parser::token::{SourceLocation, Token, TokenCategory};

/// Scan and parse `source` in one call.
///
/// On acceptance returns the full token stream (ending in [`Token::Eof`]),
/// which is what callers typically want to display. The first lexical or
/// syntax error is returned as a [`RecognizeError`].
pub fn recognize(source: &str) -> Result<Vec<Token>, RecognizeError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::new(tokens.clone());
    parser.parse_program()?;

    Ok(tokens)
}
