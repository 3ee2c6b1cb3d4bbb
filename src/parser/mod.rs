//! Recognizer for a simplified C++ subset
//!
//! This module turns source text into a token stream and checks it against
//! the fixed grammar:
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`parse`]: recursive descent recognition (tokens → accept / reject)
//! - [`token`]: token and source-location definitions
//!
//! # Supported language
//!
//! Declarations (`int`, `float`, `double`, `bool`), assignments, `if`/`else`,
//! `while`, `for`, `return`, braced blocks, and flat binary expressions over
//! identifiers, numbers, and boolean literals. There are no pointers,
//! classes, templates, arrays, string literals, comments, or preprocessor
//! directives, and no function definitions other than `main`.
//!
//! # Implementation
//!
//! Hand-written recursive descent with one routine per non-terminal and at
//! most one token of lookahead (plus the fixed `int main (` prefix check).
//! The parser recognizes; it does not build a syntax tree.

pub mod lexer;
pub mod parse;
pub mod token;

mod expressions;
mod statements;
