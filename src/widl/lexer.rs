//! Lexer module for WebIDL
//!
//! This module contains the tokenization logic for WebIDL, including token
//! definitions and the lexer implementation.
//!
//! Whitespace and comments are real tokens here rather than being skipped. The
//! parser steps over them when matching productions, but they stay inside the
//! source spans of whatever they sit between, which is what lets a parsed
//! document reproduce its input exactly.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::{tokenize, tokenize_significant, Lexeme, WebIdlLexer};
pub use tokens::Token;
