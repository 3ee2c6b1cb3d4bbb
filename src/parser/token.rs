//! Token definitions for the simplified C++ subset.

use std::fmt;

/// Source location information for error reporting.
///
/// `line` and `column` are 1-based; `offset` is the 0-based character index
/// into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Coarse token classification, used when listing the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    BooleanLiteral,
    Eof,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Punctuation => "PUNCTUATION",
            TokenCategory::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenCategory::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate position without a separate token→location table. `Ident` and
/// `Number` keep the verbatim source lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals and identifiers
    Number(String, SourceLocation),
    Ident(String, SourceLocation),

    // Keywords
    Int(SourceLocation),
    Float(SourceLocation),
    Double(SourceLocation),
    Bool(SourceLocation),
    If(SourceLocation),
    Else(SourceLocation),
    While(SourceLocation),
    For(SourceLocation),
    Return(SourceLocation),
    Main(SourceLocation),

    // Boolean literals (reserved words, but a category of their own)
    True(SourceLocation),
    False(SourceLocation),

    // Operators
    Plus(SourceLocation),    // +
    Minus(SourceLocation),   // -
    Star(SourceLocation),    // *
    Slash(SourceLocation),   // /
    Percent(SourceLocation), // %
    EqEq(SourceLocation),    // ==
    NotEq(SourceLocation),   // !=
    Lt(SourceLocation),      // <
    Le(SourceLocation),      // <=
    Gt(SourceLocation),      // >
    Ge(SourceLocation),      // >=
    AndAnd(SourceLocation),  // &&
    OrOr(SourceLocation),    // ||
    Eq(SourceLocation),      // =

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::Ident(_, loc)
            | Token::Int(loc)
            | Token::Float(loc)
            | Token::Double(loc)
            | Token::Bool(loc)
            | Token::If(loc)
            | Token::Else(loc)
            | Token::While(loc)
            | Token::For(loc)
            | Token::Return(loc)
            | Token::Main(loc)
            | Token::True(loc)
            | Token::False(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Percent(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::AndAnd(loc)
            | Token::OrOr(loc)
            | Token::Eq(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// The exact source text this token was matched from.
    ///
    /// The synthetic end-of-input token has an empty lexeme.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number(s, _) | Token::Ident(s, _) => s,
            Token::Int(_) => "int",
            Token::Float(_) => "float",
            Token::Double(_) => "double",
            Token::Bool(_) => "bool",
            Token::If(_) => "if",
            Token::Else(_) => "else",
            Token::While(_) => "while",
            Token::For(_) => "for",
            Token::Return(_) => "return",
            Token::Main(_) => "main",
            Token::True(_) => "true",
            Token::False(_) => "false",
            Token::Plus(_) => "+",
            Token::Minus(_) => "-",
            Token::Star(_) => "*",
            Token::Slash(_) => "/",
            Token::Percent(_) => "%",
            Token::EqEq(_) => "==",
            Token::NotEq(_) => "!=",
            Token::Lt(_) => "<",
            Token::Le(_) => "<=",
            Token::Gt(_) => ">",
            Token::Ge(_) => ">=",
            Token::AndAnd(_) => "&&",
            Token::OrOr(_) => "||",
            Token::Eq(_) => "=",
            Token::LParen(_) => "(",
            Token::RParen(_) => ")",
            Token::LBrace(_) => "{",
            Token::RBrace(_) => "}",
            Token::Semicolon(_) => ";",
            Token::Comma(_) => ",",
            Token::Eof(_) => "",
        }
    }

    /// Which coarse category this token belongs to.
    pub fn category(&self) -> TokenCategory {
        match self {
            Token::Number(_, _) => TokenCategory::Number,
            Token::Ident(_, _) => TokenCategory::Identifier,
            Token::Int(_)
            | Token::Float(_)
            | Token::Double(_)
            | Token::Bool(_)
            | Token::If(_)
            | Token::Else(_)
            | Token::While(_)
            | Token::For(_)
            | Token::Return(_)
            | Token::Main(_) => TokenCategory::Keyword,
            Token::True(_) | Token::False(_) => TokenCategory::BooleanLiteral,
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
            | Token::Eq(_) => TokenCategory::Operator,
            Token::LParen(_)
            | Token::RParen(_)
            | Token::LBrace(_)
            | Token::RBrace(_)
            | Token::Semicolon(_)
            | Token::Comma(_) => TokenCategory::Punctuation,
            Token::Eof(_) => TokenCategory::Eof,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(s, _) => write!(f, "number '{}'", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::True(_) | Token::False(_) => {
                write!(f, "boolean '{}'", self.lexeme())
            }
            Token::Eof(_) => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}
