//! Statement-level productions
//!
//! Recognizes the statement grammar:
//!
//! ```text
//! statements  ::= { statement }
//! statement   ::= declaration | assignment | if_stmt
//!               | while_loop | for_loop | return_stmt
//! declaration ::= type IDENT ( ';' | '=' expression ';' )
//! assignment  ::= IDENT '=' expression ';'
//! if_stmt     ::= 'if' '(' expression ')' block [ 'else' block ]
//! while_loop  ::= 'while' '(' expression ')' block
//! for_loop    ::= 'for' '(' declaration expression ';' assignment' ')' block
//! return_stmt ::= 'return' expression ';'
//! block       ::= '{' statements '}'
//! ```
//!
//! where `assignment'` in the for-loop header is the bare form without a
//! trailing `;`. Each production dispatches on its leading token; all
//! routines are `pub(crate)` methods on [`Parser`].

use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::Token;

impl Parser {
    /// STATEMENTS ::= { STATEMENT }
    ///
    /// Loops as long as the current token can start a statement. The empty
    /// sequence is valid, so this routine never fails by itself; errors come
    /// from inside the statements it recognizes.
    pub(crate) fn parse_statements(&mut self) -> Result<(), ParseError> {
        while self.starts_statement() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn starts_statement(&self) -> bool {
        self.is_type_keyword()
            || matches!(
                self.peek(),
                Token::Ident(_, _)
                    | Token::If(_)
                    | Token::While(_)
                    | Token::For(_)
                    | Token::Return(_)
            )
    }

    fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek(),
            Token::Int(_) | Token::Float(_) | Token::Double(_) | Token::Bool(_)
        )
    }

    /// Dispatch on the leading token to exactly one statement production.
    fn parse_statement(&mut self) -> Result<(), ParseError> {
        if self.is_type_keyword() {
            return self.parse_declaration();
        }

        match self.peek() {
            Token::Ident(_, _) => self.parse_assignment(),
            Token::If(_) => self.parse_if(),
            Token::While(_) => self.parse_while(),
            Token::For(_) => self.parse_for(),
            Token::Return(_) => self.parse_return(),
            _ => Err(self.error_here("statement")),
        }
    }

    /// DECLARATION ::= TYPE IDENT ( ';' | '=' EXPRESSION ';' )
    fn parse_declaration(&mut self) -> Result<(), ParseError> {
        self.advance(); // type keyword
        self.expect_identifier("after type keyword")?;

        if matches!(self.peek(), Token::Eq(_)) {
            self.advance();
            self.parse_expression()?;
        }

        self.expect_semicolon("after declaration")
    }

    /// ASSIGNMENT ::= IDENT '=' EXPRESSION ';'
    fn parse_assignment(&mut self) -> Result<(), ParseError> {
        self.parse_assignment_bare()?;
        self.expect_semicolon("after assignment")
    }

    /// Assignment without the trailing `;`, as the for-loop update uses it.
    fn parse_assignment_bare(&mut self) -> Result<(), ParseError> {
        self.expect_identifier("at start of assignment")?;
        self.expect_eq("after assignment target")?;
        self.parse_expression()
    }

    /// IF ::= 'if' '(' EXPRESSION ')' BLOCK [ 'else' BLOCK ]
    fn parse_if(&mut self) -> Result<(), ParseError> {
        self.advance(); // 'if'
        self.expect_lparen("after 'if'")?;
        self.parse_expression()?;
        self.expect_rparen("after if condition")?;
        self.parse_block()?;

        if matches!(self.peek(), Token::Else(_)) {
            self.advance();
            self.parse_block()?;
        }

        Ok(())
    }

    /// WHILE ::= 'while' '(' EXPRESSION ')' BLOCK
    fn parse_while(&mut self) -> Result<(), ParseError> {
        self.advance(); // 'while'
        self.expect_lparen("after 'while'")?;
        self.parse_expression()?;
        self.expect_rparen("after while condition")?;
        self.parse_block()
    }

    /// FOR ::= 'for' '(' DECLARATION EXPRESSION ';' ASSIGNMENT ')' BLOCK
    ///
    /// The header punctuation is asymmetric on purpose: the initializer is a
    /// full declaration carrying its own `;`, one `;` separates the
    /// condition from the update, and the update assignment has NO `;`
    /// before `)`.
    fn parse_for(&mut self) -> Result<(), ParseError> {
        self.advance(); // 'for'
        self.expect_lparen("after 'for'")?;

        if !self.is_type_keyword() {
            return Err(self.error_here("type keyword in for-loop initializer"));
        }
        self.parse_declaration()?;

        self.parse_expression()?;
        self.expect_semicolon("after for-loop condition")?;

        self.parse_assignment_bare()?;
        self.expect_rparen("after for-loop update")?;

        self.parse_block()
    }

    /// RETURN ::= 'return' EXPRESSION ';'
    fn parse_return(&mut self) -> Result<(), ParseError> {
        self.advance(); // 'return'
        self.parse_expression()?;
        self.expect_semicolon("after return value")
    }

    /// BLOCK ::= '{' STATEMENTS '}'
    pub(crate) fn parse_block(&mut self) -> Result<(), ParseError> {
        self.expect_lbrace("at start of block")?;
        self.parse_statements()?;
        self.expect_rbrace("at end of block")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn parse(source: &str) -> Result<(), ParseError> {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        Parser::new(tokens).parse_program()
    }

    #[test]
    fn test_declaration_all_types() {
        assert_eq!(parse("int a ; float b ; double c ; bool d ;"), Ok(()));
    }

    #[test]
    fn test_declaration_missing_semicolon() {
        let err = parse("int x = 5").unwrap_err();

        assert!(err.expected.starts_with("';'"));
        assert!(matches!(err.found, Token::Eof(_)));
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(parse("x = y % 2 ;"), Ok(()));
    }

    #[test]
    fn test_assignment_missing_eq() {
        let err = parse("x 5 ;").unwrap_err();

        assert!(err.expected.starts_with("'='"));
    }

    #[test]
    fn test_if_without_else() {
        assert_eq!(parse("if ( a == b ) { return 1 ; }"), Ok(()));
    }

    #[test]
    fn test_if_requires_block() {
        // Braceless bodies are not in the grammar
        let err = parse("if ( a ) return 1 ;").unwrap_err();

        assert!(err.expected.starts_with("'{'"));
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(
            parse("while ( a ) { if ( b ) { c = 1 ; } else { c = 2 ; } }"),
            Ok(())
        );
    }

    #[test]
    fn test_for_header_punctuation_is_asymmetric() {
        // DECLARATION brings its own ';'; the update has none before ')'.
        assert_eq!(
            parse("for ( int i = 0 ; i < 10 ; i = i + 1 ) { }"),
            Ok(())
        );

        // The conventional C form with a ';' after the update is rejected.
        let err =
            parse("for ( int i = 0 ; i < 10 ; i = i + 1 ; ) { }").unwrap_err();
        assert!(err.expected.starts_with("')'"));
        assert!(matches!(err.found, Token::Semicolon(_)));
    }

    #[test]
    fn test_for_initializer_must_be_declaration() {
        let err = parse("for ( i = 0 ; i < 10 ; i = i + 1 ) { }").unwrap_err();

        assert_eq!(err.expected, "type keyword in for-loop initializer");
    }

    #[test]
    fn test_for_with_statement_body() {
        assert_eq!(
            parse("for ( int i = 0 ; i < 3 ; i = i + 1 ) { x = x + i ; }"),
            Ok(())
        );
    }

    #[test]
    fn test_return_requires_expression() {
        let err = parse("return ;").unwrap_err();

        assert_eq!(err.expected, "term");
    }

    #[test]
    fn test_stray_token_in_block() {
        let err = parse("while ( a ) { x = 1 ; ; }").unwrap_err();

        assert!(err.expected.starts_with("'}'"));
    }
}
