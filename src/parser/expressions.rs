//! Expression-level productions
//!
//! The expression grammar is deliberately flat:
//!
//! ```text
//! expression ::= term { binary_op term }
//! term       ::= IDENT | NUMBER | 'true' | 'false' | '(' expression ')'
//! ```
//!
//! All binary operators bind at the same level with no precedence climbing;
//! a chain like `a + b * c` is recognized left to right as
//! TERM-OP-TERM-OP-TERM with no grouping. This mirrors the grammar exactly
//! and is not an oversight.

use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::Token;

impl Parser {
    /// EXPRESSION ::= TERM { BINARY_OP TERM }
    pub(crate) fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.parse_term()?;

        while self.is_binary_op() {
            self.advance();
            self.parse_term()?;
        }

        Ok(())
    }

    /// All operators of the grammar except `=`, which only ever assigns.
    fn is_binary_op(&self) -> bool {
        matches!(
            self.peek(),
            Token::Plus(_)
                | Token::Minus(_)
                | Token::Star(_)
                | Token::Slash(_)
                | Token::Percent(_)
                | Token::EqEq(_)
                | Token::NotEq(_)
                | Token::Lt(_)
                | Token::Le(_)
                | Token::Gt(_)
                | Token::Ge(_)
                | Token::AndAnd(_)
                | Token::OrOr(_)
        )
    }

    /// TERM ::= IDENT | NUMBER | 'true' | 'false' | '(' EXPRESSION ')'
    fn parse_term(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Token::Ident(_, _)
            | Token::Number(_, _)
            | Token::True(_)
            | Token::False(_) => {
                self.advance();
                Ok(())
            }
            Token::LParen(_) => {
                self.advance();
                self.parse_expression()?;
                self.expect_rparen("after parenthesized expression")
            }
            _ => Err(self.error_here("term")),
        }
    }
}
