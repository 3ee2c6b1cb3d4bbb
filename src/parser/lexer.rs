//! Lexer (scanner) for the simplified C++ subset.
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokenization is a single left-to-right pass with maximal munch:
//! two-character operators are tried before their one-character prefixes, and
//! identifier/number runs are consumed as far as they reach. The language
//! defines no comments or string literals, so none are recognized.

use super::token::{SourceLocation, Token};
use thiserror::Error;

/// Lexer error type.
///
/// Either variant is fatal for the whole recognition run: the scanner stops
/// at the first offending character and nothing after it is tokenized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {location}")]
    UnexpectedChar { ch: char, location: SourceLocation },

    #[error("malformed number '{lexeme}' at {location}")]
    MalformedNumber {
        lexeme: String,
        location: SourceLocation,
    },
}

impl LexError {
    /// Returns the source location of the offending character or literal.
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnexpectedChar { location, .. }
            | LexError::MalformedNumber { location, .. } => *location,
        }
    }
}

/// Lexer for the simplified C++ subset.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned stream always ends with a synthetic [`Token::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::Eof(loc)),
        };

        match ch {
            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => {
                Ok(self.identifier_or_keyword(ch, loc))
            }

            // Operators: two-character forms take precedence
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Le(loc))
                } else {
                    Ok(Token::Lt(loc))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Ge(loc))
                } else {
                    Ok(Token::Gt(loc))
                }
            }
            // `!`, `&`, and `|` exist only as halves of `!=`, `&&`, `||`
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEq(loc))
                } else {
                    Err(LexError::UnexpectedChar { ch, location: loc })
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::AndAnd(loc))
                } else {
                    Err(LexError::UnexpectedChar { ch, location: loc })
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::OrOr(loc))
                } else {
                    Err(LexError::UnexpectedChar { ch, location: loc })
                }
            }
            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            '%' => Ok(Token::Percent(loc)),

            // Punctuation
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError::UnexpectedChar { ch, location: loc }),
        }
    }

    /// Parse a numeric literal: a digit run with at most one decimal point,
    /// where the fraction must contain at least one digit. The lexeme is
    /// kept verbatim.
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        lexeme.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            self.advance();
            lexeme.push('.');

            if !matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                return Err(LexError::MalformedNumber {
                    lexeme,
                    location: loc,
                });
            }

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    lexeme.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // A second '.' ends the number; the stray dot is left for the next
        // call, where it fails as an unexpected character.
        Ok(Token::Number(lexeme, loc))
    }

    /// Parse identifier or reserved word.
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "int" => Token::Int(loc),
            "float" => Token::Float(loc),
            "double" => Token::Double(loc),
            "bool" => Token::Bool(loc),
            "if" => Token::If(loc),
            "else" => Token::Else(loc),
            "while" => Token::While(loc),
            "for" => Token::For(loc),
            "return" => Token::Return(loc),
            "main" => Token::Main(loc),
            "true" => Token::True(loc),
            "false" => Token::False(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    /// Skip whitespace (the language has no comments to skip).
    fn skip_whitespace(&mut self) {
        while matches!(
            self.peek(),
            Some(' ') | Some('\t') | Some('\r') | Some('\n')
        ) {
            self.advance();
        }
    }

    /// Peek at current character without consuming.
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character.
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location.
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenCategory;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("int x = 5 ;");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "x"));
        assert!(matches!(tokens[2], Token::Eq(_)));
        assert!(matches!(tokens[3], Token::Number(ref s, _) if s == "5"));
        assert!(matches!(tokens[4], Token::Semicolon(_)));
        assert!(matches!(tokens[5], Token::Eof(_)));
    }

    #[test]
    fn test_main_function_tokens() {
        let mut lexer = Lexer::new("int main ( ) { return 0 ; }");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Main(_)));
        assert!(matches!(tokens[2], Token::LParen(_)));
        assert!(matches!(tokens[3], Token::RParen(_)));
        assert!(matches!(tokens[4], Token::LBrace(_)));
        assert!(matches!(tokens[5], Token::Return(_)));
        assert!(matches!(tokens[6], Token::Number(ref s, _) if s == "0"));
        assert!(matches!(tokens[7], Token::Semicolon(_)));
        assert!(matches!(tokens[8], Token::RBrace(_)));
        assert!(matches!(tokens[9], Token::Eof(_)));
    }

    #[test]
    fn test_operators_maximal_munch() {
        let mut lexer = Lexer::new("== != <= >= && || = < >");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::EqEq(_)));
        assert!(matches!(tokens[1], Token::NotEq(_)));
        assert!(matches!(tokens[2], Token::Le(_)));
        assert!(matches!(tokens[3], Token::Ge(_)));
        assert!(matches!(tokens[4], Token::AndAnd(_)));
        assert!(matches!(tokens[5], Token::OrOr(_)));
        assert!(matches!(tokens[6], Token::Eq(_)));
        assert!(matches!(tokens[7], Token::Lt(_)));
        assert!(matches!(tokens[8], Token::Gt(_)));
    }

    #[test]
    fn test_adjacent_equals_lex_as_comparison_then_assign() {
        // `===` must munch `==` first, then `=`
        let mut lexer = Lexer::new("===");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::EqEq(_)));
        assert!(matches!(tokens[1], Token::Eq(_)));
        assert!(matches!(tokens[2], Token::Eof(_)));
    }

    #[test]
    fn test_keywords_vs_identifiers() {
        let mut lexer = Lexer::new("int intx _x1 whiley while");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "intx"));
        assert!(matches!(tokens[2], Token::Ident(ref s, _) if s == "_x1"));
        assert!(matches!(tokens[3], Token::Ident(ref s, _) if s == "whiley"));
        assert!(matches!(tokens[4], Token::While(_)));
    }

    #[test]
    fn test_boolean_literals() {
        let mut lexer = Lexer::new("true false");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::True(_)));
        assert!(matches!(tokens[1], Token::False(_)));
        assert_eq!(tokens[0].category(), TokenCategory::BooleanLiteral);
        assert_eq!(tokens[0].lexeme(), "true");
    }

    #[test]
    fn test_float_literal() {
        let mut lexer = Lexer::new("3.14");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number(ref s, _) if s == "3.14"));
        assert!(matches!(tokens[1], Token::Eof(_)));
    }

    #[test]
    fn test_trailing_dot_is_malformed() {
        let mut lexer = Lexer::new("1.");
        let err = lexer.tokenize().unwrap_err();

        match err {
            LexError::MalformedNumber { lexeme, location } => {
                assert_eq!(lexeme, "1.");
                assert_eq!(location.offset, 0);
            }
            other => panic!("expected malformed number, got {:?}", other),
        }
    }

    #[test]
    fn test_double_dot_is_malformed() {
        let mut lexer = Lexer::new("1..2");
        assert!(matches!(
            lexer.tokenize().unwrap_err(),
            LexError::MalformedNumber { .. }
        ));
    }

    #[test]
    fn test_second_decimal_point_ends_number() {
        // `1.2` is a complete number; the stray `.` that follows is not a
        // legal character in this language.
        let mut lexer = Lexer::new("1.2.3");
        let err = lexer.tokenize().unwrap_err();

        match err {
            LexError::UnexpectedChar { ch, location } => {
                assert_eq!(ch, '.');
                assert_eq!(location.offset, 3);
            }
            other => panic!("expected unexpected character, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_character_position() {
        let mut lexer = Lexer::new("x $ y ;");
        let err = lexer.tokenize().unwrap_err();

        match err {
            LexError::UnexpectedChar { ch, location } => {
                assert_eq!(ch, '$');
                assert_eq!(location.offset, 2);
                assert_eq!(location.line, 1);
                assert_eq!(location.column, 3);
            }
            other => panic!("expected unexpected character, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_ampersand_rejected() {
        let mut lexer = Lexer::new("a & b");
        assert!(matches!(
            lexer.tokenize().unwrap_err(),
            LexError::UnexpectedChar { ch: '&', .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0], Token::Eof(_)));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let source = "int x = 5 ; if ( x <= 10 ) { x = x + 1 ; }";
        let first = Lexer::new(source).tokenize().unwrap();
        let second = Lexer::new(source).tokenize().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_lexemes_are_verbatim() {
        let source = "count2 = 007 ;";
        let tokens = Lexer::new(source).tokenize().unwrap();

        assert_eq!(tokens[0].lexeme(), "count2");
        assert_eq!(tokens[1].lexeme(), "=");
        assert_eq!(tokens[2].lexeme(), "007");
        assert_eq!(tokens[3].lexeme(), ";");
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut lexer = Lexer::new("int x ;\ny = 2 ;");
        let tokens = lexer.tokenize().unwrap();

        let y = tokens[3].location();
        assert_eq!(y.line, 2);
        assert_eq!(y.column, 1);
        assert_eq!(y.offset, 8);
    }
}
