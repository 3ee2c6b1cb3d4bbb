//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: error types, cursor helpers, and the program entry point.
//!
//! # Parser Architecture
//!
//! Recursive descent with one routine per grammar non-terminal:
//! - This module: Parser struct, helpers, and the PROGRAM production
//! - `statements`: statement-level productions (declarations, control flow)
//! - `expressions`: the flat expression grammar
//!
//! Routines are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related productions while
//! sharing the single token cursor. The parser is a pure recognizer: it
//! builds no syntax tree, it only advances the cursor or fails.

use super::lexer::LexError;
use super::token::{SourceLocation, Token};
use thiserror::Error;

/// Syntax error: the token stream did not match the expected production.
///
/// `expected` describes the construct the active routine was looking for;
/// `found` is the offending token, which carries its own position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("expected {expected}, found {found} at {}", .found.location())]
pub struct ParseError {
    pub expected: String,
    pub found: Token,
}

impl ParseError {
    /// The position of the offending token.
    pub fn position(&self) -> SourceLocation {
        self.found.location()
    }
}

/// Failure of either recognition stage, for end-to-end callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognizeError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Recursive descent recognizer for the simplified C++ subset.
///
/// Owns a token stream (terminated by [`Token::Eof`]) and a single read
/// cursor. Each `parse_*` routine either advances the cursor past the
/// construct it recognizes or fails with a [`ParseError`]; the first failure
/// anywhere in the descent aborts the whole parse.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Recognize a whole program.
    ///
    /// A program is either `int main ( ) BLOCK` (dispatched on the fixed
    /// `int main (` prefix) or a bare statement sequence. Either way the
    /// cursor must land on end of input; trailing tokens are an error.
    pub fn parse_program(&mut self) -> Result<(), ParseError> {
        if self.starts_main_function() {
            self.parse_main_function()?;
        } else {
            self.parse_statements()?;
        }

        if !self.is_at_end() {
            return Err(self.error_here("end of input after valid program"));
        }

        Ok(())
    }

    /// MAIN_FUNCTION ::= 'int' 'main' '(' ')' BLOCK
    fn parse_main_function(&mut self) -> Result<(), ParseError> {
        self.advance(); // 'int'
        self.advance(); // 'main'
        self.advance(); // '('
        self.expect_rparen("after 'main ('")?;
        self.parse_block()
    }

    /// `main` is a reserved word, so `int main (` can only open the
    /// MAIN_FUNCTION production, never a declaration.
    fn starts_main_function(&self) -> bool {
        matches!(self.peek(), Token::Int(_))
            && matches!(self.peek_ahead(1), Some(Token::Main(_)))
            && matches!(self.peek_ahead(2), Some(Token::LParen(_)))
    }

    // ===== Cursor helpers =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    /// Build a syntax error at the current cursor position.
    pub(crate) fn error_here(&self, expected: &str) -> ParseError {
        ParseError {
            expected: expected.to_string(),
            found: self.peek().clone(),
        }
    }

    // ===== Expect helpers =====

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::Ident(_, _)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("identifier {ctx}")))
        }
    }

    pub(crate) fn expect_eq(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::Eq(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'=' {ctx}")))
        }
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::Semicolon(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("';' {ctx}")))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::LParen(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'(' {ctx}")))
        }
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::RParen(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("')' {ctx}")))
        }
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::LBrace(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'{{' {ctx}")))
        }
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        if matches!(self.peek(), Token::RBrace(_)) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'}}' {ctx}")))
        }
    }
}
